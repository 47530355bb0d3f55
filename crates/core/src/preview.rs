//! Plain text preview of an outline.
//!
//! Each section is rendered under a numbered heading, with every description
//! line as its own paragraph:
//!
//! ```text
//! Preview Outline: Owls of the World
//!
//! Slide 1: Introduction
//!
//! • Where owls live
//!
//! • What they eat
//! ```

use crate::types::Outline;

/// Formatter for outline previews.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Whether section headings carry their "Slide N:" / "Section N:" label.
    numbered: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self { numbered: true }
    }
}

impl OutlineFormatter {
    /// Create a new formatter with numbered headings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether headings are numbered.
    pub fn with_numbering(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Heading for the section at 1-based position `number`.
    pub fn heading(&self, outline: &Outline, number: usize, title: &str) -> String {
        if self.numbered {
            format!("{} {}: {}", outline.mode.label(), number, title)
        } else {
            title.to_string()
        }
    }

    /// Format the whole outline. Blocks are separated by blank lines.
    pub fn format(&self, outline: &Outline) -> String {
        let mut blocks = vec![format!("Preview Outline: {}", outline.title)];

        for (idx, item) in outline.items.iter().enumerate() {
            blocks.push(self.heading(outline, idx + 1, &item.title));
            if !item.description.is_empty() {
                blocks.push(item.description.replace('\n', "\n\n"));
            }
        }

        blocks.join("\n\n")
    }

    /// Format with a trailing newline, for writing to files.
    pub fn format_with_newline(&self, outline: &Outline) -> String {
        format!("{}\n", self.format(outline))
    }
}
