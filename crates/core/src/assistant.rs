//! Handling of a single user turn.
//!
//! The assistant classifies each message once, calls the matching generator,
//! and records both the request and the reply in the [`Session`].

use std::fmt;

use crate::generate::{ImageGenerator, NoImages, TextGenerator};
use crate::intent::Intent;
use crate::outline::OutlineParser;
use crate::session::{Message, Session};
use crate::summarize::Summarizer;
use crate::types::{Outline, OutlineMode};

/// Failure of one of the two generators during a turn.
#[derive(Debug)]
enum TurnError<T, I> {
    Text(T),
    Image(I),
}

impl<T: fmt::Display, I: fmt::Display> fmt::Display for TurnError<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(e) => e.fmt(f),
            Self::Image(e) => e.fmt(f),
        }
    }
}

/// Turns user messages into replies, outlines and images.
pub struct Assistant<G, I = NoImages> {
    text: G,
    images: I,
    parser: OutlineParser,
    summarizer: Summarizer,
}

impl<G: TextGenerator> Assistant<G, NoImages> {
    /// Create an assistant without image support.
    pub fn new(text: G) -> Self {
        Self {
            text,
            images: NoImages,
            parser: OutlineParser::new(),
            summarizer: Summarizer::new(),
        }
    }
}

impl<G, I> Assistant<G, I> {
    /// Use `images` for image requests.
    pub fn with_image_generator<J: ImageGenerator>(self, images: J) -> Assistant<G, J> {
        Assistant {
            text: self.text,
            images,
            parser: self.parser,
            summarizer: self.summarizer,
        }
    }

    /// Use a differently configured summarizer for uploaded documents.
    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }
}

impl<G, I> Assistant<G, I>
where
    G: TextGenerator,
    G::Error: fmt::Display,
    I: ImageGenerator,
    I::Error: fmt::Display,
{
    /// Handle one user message and return how it was classified.
    ///
    /// Generation failures do not escape: they become an error reply in the
    /// session, like any other reply.
    pub fn handle(&mut self, session: &mut Session, prompt: &str) -> Intent {
        session.push_message(Message::user(prompt));
        let intent = Intent::classify(prompt);
        log::debug!("Classified request as {:?}", intent);

        let reply = match self.respond(session, intent, prompt) {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("Generation failed for {:?} request: {}", intent, e);
                format!("⚠️ Error: {}", e)
            }
        };
        session.push_message(Message::assistant(reply));
        intent
    }

    fn respond(
        &mut self,
        session: &mut Session,
        intent: Intent,
        prompt: &str,
    ) -> Result<String, TurnError<G::Error, I::Error>> {
        match intent {
            Intent::Presentation => self.outline_turn(session, OutlineMode::Presentation, prompt),
            Intent::Document => self.outline_turn(session, OutlineMode::Document, prompt),
            Intent::Image => {
                let bytes = self
                    .images
                    .generate_image(prompt)
                    .map_err(TurnError::Image)?;
                let filename = session.add_image(bytes);
                log::debug!("Stored generated image as {}", filename);
                Ok("✅ Image generated!".to_string())
            }
            Intent::Chat => self.text.generate(prompt).map_err(TurnError::Text),
        }
    }

    fn outline_turn(
        &mut self,
        session: &mut Session,
        mode: OutlineMode,
        prompt: &str,
    ) -> Result<String, TurnError<G::Error, I::Error>> {
        let outline = self.draft_outline(mode, prompt).map_err(TurnError::Text)?;
        session.set_outline(outline);
        Ok(format!(
            "✅ {} outline generated! Preview below.",
            mode.name().to_uppercase()
        ))
    }

    /// Ask the text generator for an outline and a title, then parse the outline.
    pub fn draft_outline(&mut self, mode: OutlineMode, prompt: &str) -> Result<Outline, G::Error> {
        let (outline_prompt, title_prompt) = match mode {
            OutlineMode::Presentation => (
                format!("Create a PowerPoint outline with 5 slides about: {}", prompt),
                format!("Create a short, presentation-style title for: {}", prompt),
            ),
            OutlineMode::Document => (
                format!("Create a document outline with 5 sections about: {}", prompt),
                format!("Create a short, report-style title for: {}", prompt),
            ),
        };

        let outline_text = self.text.generate(&outline_prompt)?;
        let title = self.text.generate(&title_prompt)?;
        let items = self.parser.parse(&outline_text);
        Ok(Outline::new(title.trim(), mode, items))
    }

    /// Summarize an uploaded document and keep the summary in the session.
    pub fn summarize_document(
        &mut self,
        session: &mut Session,
        text: &str,
    ) -> Result<String, G::Error> {
        let summary = self.summarizer.summarize(text, &mut self.text)?;
        session.set_summary(summary.clone());
        Ok(summary)
    }
}
