use pdf_writer::Ref;

/// Object numbers for one document, fixed before any byte is written.
///
/// | object            | id            |
/// |-------------------|---------------|
/// | Catalog           | 1             |
/// | Pages (tree)      | 2             |
/// | Page[0..N]        | 3 ..= 2+N     |
/// | Font              | 3+N           |
/// | Contents[0..N]    | 4+N ..= 3+2N  |
///
/// Every cross reference can be resolved from this table alone, so the
/// writer only has to defer byte offsets, never ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLayout {
    pub catalog: Ref,
    pub page_tree: Ref,
    pub pages: Vec<Ref>,
    pub font: Ref,
    pub contents: Vec<Ref>,
}

impl ObjectLayout {
    pub fn allocate(page_count: usize) -> Self {
        let mut alloc = Ref::new(1);
        let catalog = alloc.bump();
        let page_tree = alloc.bump();
        let pages = (0..page_count).map(|_| alloc.bump()).collect();
        let font = alloc.bump();
        let contents = (0..page_count).map(|_| alloc.bump()).collect();
        Self { catalog, page_tree, pages, font, contents }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of real objects, `3 + 2N`.
    pub fn object_count(&self) -> usize {
        3 + 2 * self.page_count()
    }

    /// Rows in the xref table (objects plus the free entry 0).
    pub fn xref_size(&self) -> usize {
        self.object_count() + 1
    }
}
