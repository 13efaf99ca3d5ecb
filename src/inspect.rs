//! Read a produced PDF back through lopdf, an independent parser, and
//! summarise what a viewer would see.

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, Stream};
use serde::Serialize;

use crate::content::FONT_RESOURCE;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary {
    pub object_id: u32,
    pub media_box: Vec<f32>,
    pub base_font: Option<String>,
    /// strings shown with `Tj`, in stream order
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfSummary {
    pub version: String,
    pub object_count: usize,
    pub pages: Vec<PageSummary>,
}

pub fn inspect(bytes: &[u8]) -> Result<PdfSummary> {
    let doc = Document::load_mem(bytes)?;

    let mut pages = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let page = doc.get_object(page_id)?.as_dict()?;

        let media_box = page
            .get(b"MediaBox")?
            .as_array()?
            .iter()
            .map(|o| o.as_float())
            .collect::<lopdf::Result<Vec<f32>>>()?;

        let text = shown_strings(&Content::decode(&page_content(&doc, page)?.content)?);

        pages.push(PageSummary {
            object_id: page_id.0,
            media_box,
            base_font: page_base_font(&doc, page),
            text,
        });
    }

    Ok(PdfSummary { version: doc.version.clone(), object_count: doc.objects.len(), pages })
}

fn shown_strings(content: &Content) -> Vec<String> {
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        })
        .collect()
}

/// The one content stream a page of ours points at with `/Contents n 0 R`.
fn page_content<'a>(doc: &'a Document, page: &Dictionary) -> lopdf::Result<&'a Stream> {
    let id = page.get(b"Contents")?.as_reference()?;
    doc.get_object(id)?.as_stream()
}

fn page_base_font(doc: &Document, page: &Dictionary) -> Option<String> {
    let resources = resolve_dict(doc, page.get(b"Resources").ok()?)?;
    let fonts = resolve_dict(doc, resources.get(b"Font").ok()?)?;
    let font = resolve_dict(doc, fonts.get(FONT_RESOURCE.as_bytes()).ok()?)?;
    let name = font.get(b"BaseFont").ok()?.as_name().ok()?;
    Some(String::from_utf8_lossy(name).into_owned())
}

fn resolve_dict<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Dictionary(d) => Some(d),
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        _ => None,
    }
}
