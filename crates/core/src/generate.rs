//! Capabilities for calling out to text and image generation services.
//!
//! The core never talks to a provider directly. Callers hand in anything that
//! implements these traits, including plain closures.

/// Produces text for a prompt.
pub trait TextGenerator {
    type Error;

    fn generate(&mut self, prompt: &str) -> Result<String, Self::Error>;
}

impl<F, E> TextGenerator for F
where
    F: FnMut(&str) -> Result<String, E>,
{
    type Error = E;

    fn generate(&mut self, prompt: &str) -> Result<String, E> {
        self(prompt)
    }
}

/// Produces encoded image bytes (PNG) for a prompt.
pub trait ImageGenerator {
    type Error;

    fn generate_image(&mut self, prompt: &str) -> Result<Vec<u8>, Self::Error>;
}

/// Image generator for sessions that have no image backend configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageGenerator for NoImages {
    type Error = crate::Error;

    fn generate_image(&mut self, _prompt: &str) -> crate::Result<Vec<u8>> {
        Err(crate::Error::Generation(
            "no image generator configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_text_generator() {
        let mut calls = 0;
        let mut generator = |prompt: &str| -> Result<String, ()> {
            calls += 1;
            Ok(prompt.to_uppercase())
        };
        assert_eq!(generator.generate("hi").unwrap(), "HI");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_no_images_always_fails() {
        let err = NoImages.generate_image("a cat").unwrap_err();
        assert!(err.to_string().contains("no image generator"));
    }
}
