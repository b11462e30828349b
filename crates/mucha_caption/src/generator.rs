//! Driver-generic caption generation.

use crate::{CaptionRequest, CaptionSuggestion, caption_prompt, extract_json, parse_json};
use mucha_core::{GenerateRequest, Message};
use mucha_error::{BackendError, MuchaResult};
use mucha_interface::MuchaDriver;
use tracing::instrument;

/// Output ceiling sized for a caption, hashtags, and one tip.
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Generates caption suggestions through any [`MuchaDriver`] backend.
///
/// The generator owns the full round trip: request validation, prompt
/// construction, one driver call, JSON extraction, and shape validation.
/// Each invocation makes exactly one outbound call; there is no retry and
/// no timeout.
///
/// The attached image participates in request validation only. It is not
/// forwarded to the model; the prompt is built from platform and text.
pub struct CaptionGenerator<D: MuchaDriver> {
    driver: D,
    model: Option<String>,
}

impl<D: MuchaDriver> CaptionGenerator<D> {
    /// Create a generator over a driver, using the driver's default model.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            model: None,
        }
    }

    /// Override the model used for generation.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Access the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a caption suggestion for a request.
    ///
    /// # Errors
    ///
    /// Fails when the request carries no content, when the driver call
    /// fails, when no JSON object can be recovered from the model output,
    /// or when the recovered object violates the suggestion shape.
    #[instrument(skip(self, request), fields(platform = %request.platform))]
    pub async fn generate(&self, request: &CaptionRequest) -> MuchaResult<CaptionSuggestion> {
        request.validate()?;

        let prompt = caption_prompt(request.platform, &request.text);
        let generate_request = GenerateRequest {
            messages: vec![Message::user(prompt)],
            max_tokens: Some(MAX_OUTPUT_TOKENS),
            temperature: None,
            model: self.model.clone(),
        };

        let response = self.driver.generate(&generate_request).await?;

        let text = response
            .first_text()
            .ok_or_else(|| BackendError::new("model returned no text output"))?;

        let json = extract_json(text)?;
        let suggestion: CaptionSuggestion = parse_json(&json)?;
        suggestion.validate()?;

        tracing::debug!(
            hashtags = suggestion.hashtags.len(),
            caption_chars = suggestion.caption.chars().count(),
            "Caption suggestion generated"
        );

        Ok(suggestion)
    }
}
