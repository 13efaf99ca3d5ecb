use std::io::Write;

use pdf_writer::Ref;

/// Free-list head, object 0. Exactly 20 bytes like every other row.
pub const FREE_ENTRY: &[u8; 20] = b"0000000000 65535 f \n";

/// Width of one table row; readers seek into the table with it.
pub const ENTRY_LEN: usize = 20;

/// Byte offsets recorded while the objects were written.
///
/// `offsets[k]` belongs to object `k + 1`; the reserved entry 0 is implied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XrefTable {
    offsets: Vec<usize>,
}

impl XrefTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where object `id` starts. Ids must arrive as 1, 2, 3, ...
    pub fn record(&mut self, id: Ref, offset: usize) {
        debug_assert_eq!(id.get() as usize, self.offsets.len() + 1, "object ids out of order");
        self.offsets.push(offset);
    }

    pub fn offset_of(&self, id: Ref) -> Option<usize> {
        let index = usize::try_from(id.get()).ok()?.checked_sub(1)?;
        self.offsets.get(index).copied()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Rows including the free entry; this is also the trailer's `/Size`.
    pub fn size(&self) -> usize {
        self.offsets.len() + 1
    }

    /// Append the `xref` section and trailer to `out`, returning the offset
    /// the section starts at (the `startxref` value).
    pub fn write_to(&self, out: &mut Vec<u8>, root: Ref) -> usize {
        let start = out.len();
        let size = self.size();

        // writes into a Vec<u8> cannot fail
        let _ = writeln!(out, "xref\n0 {size}");
        out.extend_from_slice(FREE_ENTRY);
        for offset in &self.offsets {
            let _ = writeln!(out, "{offset:010} 00000 n ");
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {size} /Root {} 0 R >>\nstartxref\n{start}\n%%EOF\n",
            root.get()
        );
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_fixed_width_rows_and_trailer() {
        let mut table = XrefTable::new();
        table.record(Ref::new(1), 9);
        table.record(Ref::new(2), 58);

        let mut out = b"0123456789".to_vec();
        let start = table.write_to(&mut out, Ref::new(1));
        assert_eq!(start, 10);

        let text = String::from_utf8(out[start..].to_vec()).unwrap();
        assert_eq!(
            text,
            "xref\n0 3\n\
             0000000000 65535 f \n\
             0000000009 00000 n \n\
             0000000058 00000 n \n\
             trailer\n<< /Size 3 /Root 1 0 R >>\nstartxref\n10\n%%EOF\n"
        );
        for row in text.lines().skip(2).take(3) {
            assert_eq!(row.len() + 1, ENTRY_LEN);
        }
    }

    #[test]
    fn offset_lookup() {
        let mut table = XrefTable::new();
        table.record(Ref::new(1), 9);
        assert_eq!(table.offset_of(Ref::new(1)), Some(9));
        assert_eq!(table.offset_of(Ref::new(2)), None);
        assert_eq!(table.size(), 2);
    }
}
