//! Classification of a user request into the kind of output it asks for.

use serde::{Deserialize, Serialize};

use crate::types::OutlineMode;

const PRESENTATION_KEYWORDS: &[&str] = &["ppt", "presentation", "slides"];
const DOCUMENT_KEYWORDS: &[&str] = &["doc", "document", "report"];
const IMAGE_KEYWORDS: &[&str] = &["image", "picture", "photo"];

/// What a user message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Plain conversation.
    Chat,
    /// A slide outline.
    Presentation,
    /// A document outline.
    Document,
    /// A generated image.
    Image,
}

impl Intent {
    /// Classify a message by keyword.
    ///
    /// Keywords match anywhere in the lowercased message, so "docker" counts
    /// as a document request. Presentation keywords win over document ones,
    /// which win over image ones.
    pub fn classify(message: &str) -> Self {
        let text = message.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

        if mentions(PRESENTATION_KEYWORDS) {
            Self::Presentation
        } else if mentions(DOCUMENT_KEYWORDS) {
            Self::Document
        } else if mentions(IMAGE_KEYWORDS) {
            Self::Image
        } else {
            Self::Chat
        }
    }

    /// The outline mode for outline requests.
    pub fn outline_mode(&self) -> Option<OutlineMode> {
        match self {
            Self::Presentation => Some(OutlineMode::Presentation),
            Self::Document => Some(OutlineMode::Document),
            Self::Chat | Self::Image => None,
        }
    }
}
