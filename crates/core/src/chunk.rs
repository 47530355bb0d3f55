//! Overlapping fixed-size windows over long text.
//!
//! Sizes are counted in characters (Unicode scalar values), so a window never
//! splits a multi-byte character.

use crate::{Error, Result};

/// Default window size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 8000;

/// Default overlap between consecutive windows, in characters.
pub const DEFAULT_OVERLAP: usize = 300;

/// Splits text into overlapping windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl Chunker {
    /// Create a chunker, rejecting parameters that would never make progress.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidArgument(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(Error::InvalidArgument(format!(
                "overlap ({}) must be smaller than chunk size ({})",
                overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split `text` into windows of at most `chunk_size` characters, each
    /// starting `overlap` characters before the previous one ended.
    pub fn chunk<'a>(&self, text: &'a str) -> ChunkSet<'a> {
        // Byte offset of every character boundary, including the end.
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let len = boundaries.len() - 1;

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < len {
            let end = (start + self.chunk_size).min(len);
            chunks.push(&text[boundaries[start]..boundaries[end]]);
            if end == len {
                break;
            }
            start = end.saturating_sub(self.overlap);
        }

        log::debug!(
            "Split {} characters into {} chunks (size {}, overlap {})",
            len,
            chunks.len(),
            self.chunk_size,
            self.overlap
        );

        ChunkSet {
            chunks,
            overlap: self.overlap,
        }
    }
}

/// Split `text` with the given window size and overlap.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Result<ChunkSet<'_>> {
    Ok(Chunker::new(chunk_size, overlap)?.chunk(text))
}

/// Ordered windows borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSet<'a> {
    chunks: Vec<&'a str>,
    overlap: usize,
}

impl<'a> ChunkSet<'a> {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, &'a str> {
        self.chunks.iter()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.chunks
    }

    /// Stitch the chunks back together by dropping the overlapping prefix of
    /// every chunk after the first.
    pub fn reconstruct(&self) -> String {
        let mut text = String::new();
        for (idx, chunk) in self.chunks.iter().enumerate() {
            if idx == 0 {
                text.push_str(chunk);
            } else {
                text.extend(chunk.chars().skip(self.overlap));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_chunks() {
        let chunks = chunk("", 10, 2).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = chunk("hello", 10, 2).unwrap();
        assert_eq!(chunks.as_slice(), &["hello"]);
    }

    #[test]
    fn test_exact_size_is_one_chunk() {
        let chunks = chunk("abcdefghij", 10, 2).unwrap();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_windows_overlap() {
        let chunks = chunk("abcdefghij", 4, 1).unwrap();
        assert_eq!(chunks.as_slice(), &["abcd", "defg", "ghij"]);
    }

    #[test]
    fn test_last_window_may_be_short() {
        let chunks = chunk("abcdefghijk", 4, 1).unwrap();
        assert_eq!(chunks.as_slice(), &["abcd", "defg", "ghij", "jk"]);
    }

    #[test]
    fn test_zero_overlap() {
        let chunks = chunk("abcdef", 2, 0).unwrap();
        assert_eq!(chunks.as_slice(), &["ab", "cd", "ef"]);
    }

    #[test]
    fn test_large_input_chunk_count() {
        let text = "a".repeat(50_000);
        let chunks = chunk(&text, 8000, 300).unwrap();
        assert_eq!(chunks.len(), 7);
        assert!(chunks.iter().all(|c| c.chars().count() <= 8000));
    }

    #[test]
    fn test_default_chunker_matches_explicit_defaults() {
        let text = "xyz".repeat(9000);
        let chunker = Chunker::default();
        assert_eq!(chunker.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(chunker.overlap(), DEFAULT_OVERLAP);
        let a = chunker.chunk(&text);
        let b = chunk(&text, 8000, 300).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic() {
        let text = "The quick brown fox. ".repeat(1000);
        assert_eq!(
            chunk(&text, 8000, 300).unwrap(),
            chunk(&text, 8000, 300).unwrap()
        );
    }

    #[test]
    fn test_reconstruct_round_trips() {
        let text: String = (0..5000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        for (size, overlap) in [(1, 0), (7, 3), (100, 99), (4999, 10), (8000, 300)] {
            let chunks = chunk(&text, size, overlap).unwrap();
            assert!(!chunks.is_empty());
            assert!(chunks.iter().all(|c| c.chars().count() <= size));
            assert_eq!(chunks.reconstruct(), text, "size {} overlap {}", size, overlap);
        }
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "héllo wörld ✓✓✓";
        let chunks = chunk(text, 5, 2).unwrap();
        assert!(chunks.iter().all(|c| c.chars().count() <= 5));
        assert_eq!(chunks.as_slice()[0], "héllo");
        assert_eq!(chunks.reconstruct(), text);
    }

    #[test]
    fn test_rejects_overlap_not_smaller_than_size() {
        assert!(matches!(chunk("abc", 4, 4), Err(Error::InvalidArgument(_))));
        assert!(matches!(chunk("abc", 4, 9), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        assert!(matches!(Chunker::new(0, 0), Err(Error::InvalidArgument(_))));
    }
}
