//! Core logic for turning generated text into outlines and summaries:
//! overlapping text chunking, map-then-reduce summarization, outline
//! parsing, and the per-session assistant that ties them together.

pub mod assistant;
pub mod chunk;
pub mod error;
pub mod filename;
pub mod generate;
pub mod intent;
pub mod outline;
pub mod preview;
pub mod session;
pub mod summarize;
pub mod types;

pub use assistant::Assistant;
pub use chunk::{chunk, ChunkSet, Chunker};
pub use error::{Error, Result};
pub use filename::sanitize_filename;
pub use generate::{ImageGenerator, NoImages, TextGenerator};
pub use intent::Intent;
pub use outline::{parse_outline, OutlineParser};
pub use preview::OutlineFormatter;
pub use session::{GeneratedImage, Message, Role, Session};
pub use summarize::{summarize, Summarizer};
pub use types::{Outline, OutlineItem, OutlineMode};
