//! Domain types for representing generated outlines.

use serde::{Deserialize, Serialize};

use crate::filename::sanitize_filename;

/// A complete outline: a title plus its sections in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Title of the presentation or document.
    pub title: String,

    /// Whether this outline becomes slides or document sections.
    pub mode: OutlineMode,

    /// Sections in the order the generator produced them.
    pub items: Vec<OutlineItem>,
}

impl Outline {
    /// Create a new outline.
    pub fn new(title: impl Into<String>, mode: OutlineMode, items: Vec<OutlineItem>) -> Self {
        Self {
            title: title.into(),
            mode,
            items,
        }
    }

    /// Filename for the exported file: the sanitized title plus the mode's extension.
    pub fn file_name(&self) -> String {
        format!("{}.{}", sanitize_filename(&self.title), self.mode.extension())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the outline has no sections.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The kind of file an outline is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlineMode {
    /// PowerPoint presentation.
    #[serde(rename = "ppt")]
    Presentation,
    /// Word document.
    #[serde(rename = "doc")]
    Document,
}

impl OutlineMode {
    /// Parse a mode from its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ppt" | "pptx" | "presentation" => Some(Self::Presentation),
            "doc" | "docx" | "document" => Some(Self::Document),
            _ => None,
        }
    }

    /// Short name, as used in serialized outlines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Presentation => "ppt",
            Self::Document => "doc",
        }
    }

    /// Label shown in front of each section number.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presentation => "Slide",
            Self::Document => "Section",
        }
    }

    /// File extension of the exported file.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Presentation => "pptx",
            Self::Document => "docx",
        }
    }

    /// MIME type of the exported file.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Presentation => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Document => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A single titled section of an outline.
///
/// `description` holds one line per paragraph or bullet, joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub title: String,
    pub description: String,
}

impl OutlineItem {
    /// Create a new outline item.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Description split back into its lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.description.lines()
    }
}
