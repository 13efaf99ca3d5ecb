use std::num::NonZeroUsize;

/// Split `lines` into page-sized, order-preserving chunks.
///
/// Always yields at least one chunk: an empty input still renders one
/// (empty) page.
pub fn paginate<T>(lines: &[T], capacity: NonZeroUsize) -> Vec<&[T]> {
    if lines.is_empty() {
        return vec![&lines[..0]];
    }
    lines.chunks(capacity.get()).collect()
}

/// `max(1, ceil(len / capacity))`
pub fn page_count(len: usize, capacity: NonZeroUsize) -> usize {
    len.div_ceil(capacity.get()).max(1)
}
