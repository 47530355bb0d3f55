//! Map-then-reduce summarization of long text.
//!
//! Short text is summarized with a single call. Longer text is split with a
//! [`Chunker`], every chunk is summarized on its own, and the partial
//! summaries are merged with one final call.

use crate::chunk::Chunker;
use crate::generate::TextGenerator;

const SINGLE_PROMPT: &str = "Summarize the following text in detail:\n\n";
const MAP_PROMPT: &str = "Summarize this part of a longer document:\n\n";
const REDUCE_PROMPT: &str = "Combine these summaries into one clean, well-structured summary:\n\n";

/// Recursive summarizer over an injected text generator.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    chunker: Chunker,
}

impl Summarizer {
    /// Create a summarizer with the default 8000/300 character windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different chunker.
    pub fn with_chunker(mut self, chunker: Chunker) -> Self {
        self.chunker = chunker;
        self
    }

    /// Summarize `text`.
    ///
    /// Makes one generator call when the text fits in a single window,
    /// otherwise one call per chunk plus one to merge. The first generator
    /// error is returned as-is.
    pub fn summarize<G>(&self, text: &str, generator: &mut G) -> Result<String, G::Error>
    where
        G: TextGenerator + ?Sized,
    {
        let chunks = self.chunker.chunk(text);
        if chunks.len() <= 1 {
            log::debug!("Summarizing {} characters in one call", text.len());
            return generator.generate(&format!("{}{}", SINGLE_PROMPT, text));
        }

        let total = chunks.len();
        let mut partials = Vec::with_capacity(total);
        for (idx, chunk) in chunks.iter().enumerate() {
            log::debug!("Summarizing chunk {}/{}", idx + 1, total);
            let summary = generator.generate(&format!("{}{}", MAP_PROMPT, chunk))?;
            partials.push(format!("Chunk {}:\n{}", idx + 1, summary.trim()));
        }

        log::debug!("Combining {} partial summaries", total);
        generator.generate(&format!("{}{}", REDUCE_PROMPT, partials.join("\n\n")))
    }
}

/// Summarize `text` with the default chunk settings.
pub fn summarize<G>(text: &str, generator: &mut G) -> Result<String, G::Error>
where
    G: TextGenerator + ?Sized,
{
    Summarizer::new().summarize(text, generator)
}
