//! HTTP API for caption generation.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use mucha_caption::{CaptionGenerator, CaptionRequest};
use mucha_error::{MuchaErrorKind, MuchaResult, ServerError, ServerErrorKind};
use mucha_interface::MuchaDriver;
use serde_json::json;
use std::sync::Arc;

/// Error message returned when both text and image are missing.
pub const MISSING_CONTENT_MESSAGE: &str = "Text nebo obrázek je povinný";

/// Generic error message returned when the upstream model call fails.
///
/// The underlying error is logged and never surfaced to the caller.
pub const GENERATION_FAILED_MESSAGE: &str = "Nepodařilo se zpracovat žádost o AI generování";

/// API state containing the caption generator.
pub struct ApiState<D: MuchaDriver> {
    generator: Arc<CaptionGenerator<D>>,
}

impl<D: MuchaDriver> Clone for ApiState<D> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<D: MuchaDriver> ApiState<D> {
    /// Creates new API state.
    pub fn new(generator: CaptionGenerator<D>) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Creates the caption service router.
pub fn create_router<D: MuchaDriver + 'static>(state: ApiState<D>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(generate_caption::<D>))
        .with_state(state)
}

/// Bind the address and run the service until shutdown.
pub async fn serve<D: MuchaDriver + 'static>(
    bind_addr: &str,
    state: ApiState<D>,
) -> MuchaResult<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Configuration(format!(
            "failed to bind {}: {}",
            bind_addr, e
        )))
    })?;

    tracing::info!(addr = %bind_addr, "Caption service listening");

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Http(e.to_string())))?;

    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Generate a caption suggestion for a draft.
///
/// Requests with neither text nor image are rejected with 400 before the
/// model is contacted. Every other failure maps to a generic 500; the
/// original error is logged, not returned.
async fn generate_caption<D: MuchaDriver + 'static>(
    State(state): State<ApiState<D>>,
    Json(request): Json<CaptionRequest>,
) -> Response {
    if request.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": MISSING_CONTENT_MESSAGE})),
        )
            .into_response();
    }

    match state.generator.generate(&request).await {
        Ok(suggestion) => (StatusCode::OK, Json(suggestion)).into_response(),
        Err(e) => {
            let transient = matches!(
                e.kind(),
                MuchaErrorKind::Gemini(gemini) if gemini.is_transient()
            );
            tracing::error!(error = %e, transient, platform = %request.platform, "Caption generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": GENERATION_FAILED_MESSAGE})),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mucha_caption::{CaptionSuggestion, Platform};
    use mucha_core::{GenerateRequest, GenerateResponse, Output};
    use mucha_error::{GeminiError, GeminiErrorKind};
    use std::sync::Mutex;

    const CONFORMING_JSON: &str = r##"{
        "caption": "Nové vizitky za akční ceny! 🎉",
        "hashtags": ["#tisk", "#vizitky", "#akce", "#design", "#praha"],
        "engagementTip": "Přidejte do popisku otázku pro sledující."
    }"##;

    /// Scripted driver: plays back a fixed outcome and counts calls.
    struct ScriptedDriver {
        output: Result<String, GeminiErrorKind>,
        calls: Mutex<usize>,
    }

    impl ScriptedDriver {
        fn success(text: &str) -> Self {
            Self {
                output: Ok(text.to_string()),
                calls: Mutex::new(0),
            }
        }

        fn failure(kind: GeminiErrorKind) -> Self {
            Self {
                output: Err(kind),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl MuchaDriver for ScriptedDriver {
        async fn generate(&self, _req: &GenerateRequest) -> MuchaResult<GenerateResponse> {
            *self.calls.lock().unwrap() += 1;
            match &self.output {
                Ok(text) => Ok(GenerateResponse {
                    outputs: vec![Output::Text(text.clone())],
                }),
                Err(kind) => Err(GeminiError::new(kind.clone()).into()),
            }
        }

        fn provider_name(&self) -> &'static str {
            "scripted"
        }

        fn model_name(&self) -> &str {
            "scripted-model"
        }
    }

    fn state_with(driver: ScriptedDriver) -> ApiState<ScriptedDriver> {
        ApiState::new(CaptionGenerator::new(driver))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn empty_request_is_rejected_without_a_model_call() {
        let state = state_with(ScriptedDriver::success(CONFORMING_JSON));
        let request = CaptionRequest::text(Platform::Facebook, "");

        let response = generate_caption(State(state.clone()), Json(request)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], MISSING_CONTENT_MESSAGE);
        assert_eq!(state.generator.driver().calls(), 0);
    }

    #[tokio::test]
    async fn valid_request_returns_the_suggestion_verbatim() {
        let state = state_with(ScriptedDriver::success(CONFORMING_JSON));
        let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");

        let response = generate_caption(State(state.clone()), Json(request)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let suggestion: CaptionSuggestion =
            serde_json::from_value(body_json(response).await).unwrap();
        assert!(!suggestion.caption.is_empty());
        assert!(suggestion.hashtags.len() >= 5 && suggestion.hashtags.len() <= 10);
        assert_eq!(state.generator.driver().calls(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_a_generic_500() {
        let state = state_with(ScriptedDriver::failure(GeminiErrorKind::HttpStatus {
            status_code: 503,
            message: "secret internal detail".to_string(),
        }));
        let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");

        let response = generate_caption(State(state), Json(request)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], GENERATION_FAILED_MESSAGE);
        // Internal detail never leaks into the response
        assert!(!body.to_string().contains("secret internal detail"));
    }

    #[tokio::test]
    async fn nonconforming_model_output_maps_to_a_generic_500() {
        let short = r##"{"caption": "Ahoj", "hashtags": ["#a"], "engagementTip": "Tip"}"##;
        let state = state_with(ScriptedDriver::success(short));
        let request = CaptionRequest::text(Platform::Facebook, "Akce");

        let response = generate_caption(State(state), Json(request)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], GENERATION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn image_only_request_is_accepted() {
        let state = state_with(ScriptedDriver::success(CONFORMING_JSON));
        let request = CaptionRequest::text(Platform::Instagram, "").with_image_data("aGVsbG8=");

        let response = generate_caption(State(state), Json(request)).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
