//! Chunk range math.
//!
//! Splits a file of known size into consecutive fixed-size byte ranges.
//! Used by both the chunked reader and the file splitter.

/// Chunk length used by the ingestion pipeline when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// A single chunk: byte range [start, end) (half-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    /// Start offset (inclusive).
    pub start: u64,
    /// End offset (exclusive).
    pub end: u64,
}

impl ChunkRange {
    /// Length of this chunk in bytes.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds a chunk plan for `total_size` bytes in pieces of `chunk_size`.
///
/// Every chunk is exactly `chunk_size` long except the last, which holds the
/// remainder. Returns an empty vec if `total_size` or `chunk_size` is 0.
pub fn plan_chunks(total_size: u64, chunk_size: u64) -> Vec<ChunkRange> {
    if total_size == 0 || chunk_size == 0 {
        return Vec::new();
    }

    let count = total_size.div_ceil(chunk_size);
    let mut out = Vec::with_capacity(count as usize);
    let mut offset = 0u64;

    while offset < total_size {
        let end = offset.saturating_add(chunk_size).min(total_size);
        out.push(ChunkRange { start: offset, end });
        offset = end;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_chunks_even() {
        let chunks = plan_chunks(1000, 250);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], ChunkRange { start: 0, end: 250 });
        assert_eq!(chunks[3], ChunkRange { start: 750, end: 1000 });
        assert!(chunks.iter().all(|c| c.len() == 250));
    }

    #[test]
    fn plan_chunks_final_partial() {
        let chunks = plan_chunks(1001, 500);
        assert_eq!(
            chunks,
            vec![
                ChunkRange { start: 0, end: 500 },
                ChunkRange { start: 500, end: 1000 },
                ChunkRange { start: 1000, end: 1001 },
            ]
        );
        assert_eq!(chunks[2].len(), 1);
    }

    #[test]
    fn plan_chunks_larger_than_file() {
        let chunks = plan_chunks(10, 500);
        assert_eq!(chunks, vec![ChunkRange { start: 0, end: 10 }]);
    }

    #[test]
    fn plan_chunks_empty() {
        assert!(plan_chunks(0, 500).is_empty());
        assert!(plan_chunks(100, 0).is_empty());
    }

    #[test]
    fn plan_chunks_huge_chunk_size_does_not_overflow() {
        let chunks = plan_chunks(3, u64::MAX);
        assert_eq!(chunks, vec![ChunkRange { start: 0, end: 3 }]);
    }
}
