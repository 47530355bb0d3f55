//! Per-conversation state.

use serde::{Deserialize, Serialize};

use crate::types::Outline;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// An image produced during the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Name the image is offered under, e.g. `image_1.png`.
    pub filename: String,

    /// Encoded PNG bytes.
    pub content: Vec<u8>,
}

/// State of a single conversation.
///
/// Created when the conversation starts and only changed by the assistant
/// while it handles a request.
#[derive(Debug, Clone, Default)]
pub struct Session {
    messages: Vec<Message>,
    outline: Option<Outline>,
    images: Vec<GeneratedImage>,
    images_created: usize,
    summary: Option<String>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Conversation history, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent assistant reply, if any.
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
    }

    /// The outline awaiting export, if any.
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// Images generated and not yet taken, in order.
    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    /// The latest document summary, if any.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace any previous outline with `outline`.
    pub fn set_outline(&mut self, outline: Outline) {
        self.outline = Some(outline);
    }

    /// Remove and return the outline, e.g. once it has been exported.
    pub fn take_outline(&mut self) -> Option<Outline> {
        self.outline.take()
    }

    /// Store an image under the next `image_{n}.png` name and return that name.
    ///
    /// Numbering continues across [`Session::take_images`], so names never repeat.
    pub fn add_image(&mut self, content: Vec<u8>) -> String {
        self.images_created += 1;
        let filename = format!("image_{}.png", self.images_created);
        self.images.push(GeneratedImage {
            filename: filename.clone(),
            content,
        });
        filename
    }

    /// Remove and return the pending images, e.g. once they have been exported.
    pub fn take_images(&mut self) -> Vec<GeneratedImage> {
        std::mem::take(&mut self.images)
    }

    pub fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }

    /// Clear all state, as at the start of a new conversation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
