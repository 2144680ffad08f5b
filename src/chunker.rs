/// Splits an ordered list into contiguous groups of at most `chunk_size`
/// records. Pure partition: order preserved, nothing dropped or deduplicated,
/// only the last chunk may be shorter. `chunk_size` must be at least 1.
pub fn split_into_chunks<T>(records: &[T], chunk_size: usize) -> impl Iterator<Item = &[T]> {
    records.chunks(chunk_size)
}
