//! Mock generation driver for testing.

use async_trait::async_trait;
use mucha_core::{GenerateRequest, GenerateResponse, Output};
use mucha_error::{GeminiError, GeminiErrorKind, MuchaResult};
use mucha_interface::MuchaDriver;
use std::sync::{Arc, Mutex};

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

/// Mock driver for testing.
///
/// Allows tests to control model responses and verify call behavior without
/// making actual API calls.
pub struct MockDriver {
    responses: Vec<MockResponse>,
    call_count: Arc<Mutex<usize>>,
}

impl MockDriver {
    /// Create a mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.into())])
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// Create a mock with a sequence of responses.
    ///
    /// The last response repeats once the sequence is exhausted.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl MuchaDriver for MockDriver {
    async fn generate(&self, _req: &GenerateRequest) -> MuchaResult<GenerateResponse> {
        let index = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current.min(self.responses.len().saturating_sub(1))
        };

        match &self.responses[index] {
            MockResponse::Success(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            MockResponse::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
