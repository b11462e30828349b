// Tests for the caption generation round trip using a mock driver.
//
// These validate CaptionGenerator behavior without real API calls: request
// validation happens before the driver is contacted, conforming output is
// accepted, and shape violations fail the request.

mod test_utils;

use mucha_caption::{CaptionGenerator, CaptionRequest, Platform};
use mucha_error::GeminiErrorKind;
use test_utils::{MockDriver, MockResponse};

const CONFORMING_JSON: &str = r##"{
    "caption": "Nové vizitky, které si vaši klienti zapamatují! ✨",
    "hashtags": ["#tisk", "#vizitky", "#akce", "#branding", "#podnikani", "#design"],
    "engagementTip": "Zeptejte se sledujících, jaký design se jim líbí víc."
}"##;

#[tokio::test]
async fn generates_suggestion_from_conforming_output() -> anyhow::Result<()> {
    let mock = MockDriver::new_success(CONFORMING_JSON);
    let generator = CaptionGenerator::new(mock);

    let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
    let suggestion = generator.generate(&request).await?;

    assert!(!suggestion.caption.is_empty());
    assert!(suggestion.hashtags.len() >= 5 && suggestion.hashtags.len() <= 10);
    assert!(suggestion.hashtags.iter().all(|h| h.starts_with('#')));
    assert!(!suggestion.engagement_tip.is_empty());
    assert_eq!(generator.driver().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn accepts_output_wrapped_in_markdown_fences() -> anyhow::Result<()> {
    let wrapped = format!("Tady je výsledek:\n```json\n{}\n```", CONFORMING_JSON);
    let generator = CaptionGenerator::new(MockDriver::new_success(wrapped));

    let request = CaptionRequest::text(Platform::Facebook, "Víkendová sleva na letáky");
    let suggestion = generator.generate(&request).await?;

    assert_eq!(suggestion.hashtags.len(), 6);
    Ok(())
}

#[tokio::test]
async fn empty_request_never_reaches_the_driver() {
    let generator = CaptionGenerator::new(MockDriver::new_success(CONFORMING_JSON));

    let request = CaptionRequest::text(Platform::Facebook, "");
    let result = generator.generate(&request).await;

    assert!(result.is_err());
    assert_eq!(generator.driver().call_count(), 0);
}

#[tokio::test]
async fn image_only_request_reaches_the_driver() -> anyhow::Result<()> {
    let generator = CaptionGenerator::new(MockDriver::new_success(CONFORMING_JSON));

    let request = CaptionRequest::text(Platform::Instagram, "").with_image_data("aGVsbG8=");
    generator.generate(&request).await?;

    assert_eq!(generator.driver().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn driver_failure_propagates() {
    let generator = CaptionGenerator::new(MockDriver::new_error(GeminiErrorKind::HttpStatus {
        status_code: 503,
        message: "Model is overloaded".to_string(),
    }));

    let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
    let result = generator.generate(&request).await;

    assert!(result.is_err());
    assert_eq!(generator.driver().call_count(), 1);
}

#[tokio::test]
async fn fresh_request_succeeds_after_a_failure() -> anyhow::Result<()> {
    let generator = CaptionGenerator::new(MockDriver::new_sequence(vec![
        MockResponse::Error(GeminiErrorKind::HttpStatus {
            status_code: 503,
            message: "Service unavailable".to_string(),
        }),
        MockResponse::Success(CONFORMING_JSON.to_string()),
    ]));

    let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");

    // Each generation is independent; a failed round trip leaves no state
    // behind and the next user action issues a new single call.
    assert!(generator.generate(&request).await.is_err());
    let suggestion = generator.generate(&request).await?;

    assert_eq!(suggestion.hashtags.len(), 6);
    assert_eq!(generator.driver().call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn non_json_output_is_an_error() {
    let generator =
        CaptionGenerator::new(MockDriver::new_success("Bohužel nemohu odpovědět v JSON."));

    let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
    assert!(generator.generate(&request).await.is_err());
}

#[tokio::test]
async fn too_few_hashtags_fail_validation() {
    let short = r##"{
        "caption": "Nové vizitky! ✨",
        "hashtags": ["#tisk", "#vizitky"],
        "engagementTip": "Přidejte otázku."
    }"##;
    let generator = CaptionGenerator::new(MockDriver::new_success(short));

    let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
    assert!(generator.generate(&request).await.is_err());
}

#[tokio::test]
async fn missing_tip_fails_parsing() {
    let missing_field = r##"{
        "caption": "Nové vizitky! ✨",
        "hashtags": ["#tisk", "#vizitky", "#akce", "#branding", "#podnikani"]
    }"##;
    let generator = CaptionGenerator::new(MockDriver::new_success(missing_field));

    let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
    assert!(generator.generate(&request).await.is_err());
}
