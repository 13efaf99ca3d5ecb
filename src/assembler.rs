//! Single-pass PDF 1.4 writer for paginated plain text.
//!
//! Object ids come from [`ObjectLayout`] before anything is written, so the
//! only deferred values are byte offsets. Those are recorded by
//! [`ObjectWriter`] from its own buffer as each object starts and are the
//! sole input of the xref table.

use log::debug;
use pdf_writer::writers::Catalog;
use pdf_writer::{Chunk, Finish, Name, Rect, Ref};

use crate::alloc::ObjectLayout;
use crate::content::{FONT_RESOURCE, page_program};
use crate::page_params::PageParams;
use crate::pager::paginate;
use crate::xref::XrefTable;

pub const HEADER: &[u8] = b"%PDF-1.4\n";

/// Owns the growing file and the offset of every object written so far.
pub struct ObjectWriter {
    buf: Vec<u8>,
    xref: XrefTable,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self { buf: HEADER.to_vec(), xref: XrefTable::new() }
    }

    /// Serialise object `id` through a fresh [`Chunk`] and append it,
    /// recording the offset of its `id 0 obj` line.
    ///
    /// `write` must put exactly one indirect object, numbered `id`, into the
    /// chunk.
    pub fn object(&mut self, id: Ref, write: impl FnOnce(&mut Chunk)) {
        let mut chunk = Chunk::new();
        write(&mut chunk);
        debug_assert!(chunk.as_bytes().starts_with(format!("{} 0 obj", id.get()).as_bytes()));

        self.xref.record(id, self.buf.len());
        self.buf.extend_from_slice(chunk.as_bytes());
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Append xref + trailer and hand back the finished file.
    pub fn finish(mut self, root: Ref) -> (Vec<u8>, XrefTable, usize) {
        let xref_offset = self.xref.write_to(&mut self.buf, root);
        (self.buf, self.xref, xref_offset)
    }
}

impl Default for ObjectWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete document plus the bookkeeping used to write it.
#[derive(Debug, Clone)]
pub struct AssembledPdf {
    pub bytes: Vec<u8>,
    pub layout: ObjectLayout,
    pub xref: XrefTable,
    /// where the `xref` keyword starts, as announced by `startxref`
    pub xref_offset: usize,
}

impl AssembledPdf {
    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Debug, Clone, Default)]
pub struct Assembler {
    params: PageParams,
}

impl Assembler {
    pub fn new(params: PageParams) -> Self {
        Self { params }
    }

    pub fn assemble<S: AsRef<str>>(&self, title: &str, lines: &[S]) -> AssembledPdf {
        let pages = paginate(lines, self.params.lines_per_page);
        let layout = ObjectLayout::allocate(pages.len());
        let total = pages.len();

        let mut w = ObjectWriter::new();

        w.object(layout.catalog, |c| {
            c.indirect(layout.catalog).start::<Catalog>().pages(layout.page_tree);
        });

        w.object(layout.page_tree, |c| {
            c.pages(layout.page_tree).kids(layout.pages.iter().copied()).count(total as i32);
        });

        let size = self.params.size;
        let media_box = Rect::new(0.0, 0.0, size.width as f32, size.height as f32);
        for (page_id, content_id) in layout.pages.iter().zip(&layout.contents) {
            w.object(*page_id, |c| {
                let mut page = c.page(*page_id);
                page.parent(layout.page_tree);
                page.media_box(media_box);
                let mut res = page.resources();
                res.fonts().pair(Name(FONT_RESOURCE.as_bytes()), layout.font);
                res.finish();
                page.contents(*content_id);
                page.finish();
            });
        }

        w.object(layout.font, |c| {
            c.type1_font(layout.font).base_font(Name(self.params.font.as_str().as_bytes()));
        });

        for (i, (content_id, page_lines)) in layout.contents.iter().zip(&pages).enumerate() {
            let program = page_program(&self.params, title, i + 1, total, page_lines);
            w.object(*content_id, |c| {
                c.stream(*content_id, &program);
            });
        }

        let (bytes, xref, xref_offset) = w.finish(layout.catalog);
        debug!(
            "assembled {} page(s), {} objects, {} bytes, xref at {}",
            total,
            layout.object_count(),
            bytes.len(),
            xref_offset
        );
        AssembledPdf { bytes, layout, xref, xref_offset }
    }
}

/// Assemble with the default A4 / 12pt Helvetica / 45 lines-per-page layout.
pub fn assemble<S: AsRef<str>>(title: &str, lines: &[S]) -> AssembledPdf {
    Assembler::default().assemble(title, lines)
}
