//! Utilities for extracting structured data from model responses.
//!
//! Even when pinned to JSON-only output, models wrap the object in markdown
//! fences or preface it with commentary often enough that naive parsing
//! fails. The extractor handles the common response shapes before handing
//! the payload to serde.

use mucha_error::{CaptionError, CaptionErrorKind, JsonError, MuchaResult};

/// Extract a JSON object from a response that may contain markdown or extra text.
///
/// Tries two strategies in order:
/// 1. Markdown code blocks: ```` ```json ... ``` ````
/// 2. Balanced braces: `{ ... }`
///
/// # Errors
///
/// Returns an error if no JSON object is found in the response.
///
/// # Examples
///
/// ```
/// use mucha_caption::extract_json;
///
/// let response = "Tady je výsledek:\n```json\n{\"caption\": \"Ahoj\"}\n```\n";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("caption"));
/// ```
pub fn extract_json(response: &str) -> MuchaResult<String> {
    if let Some(json) = extract_from_code_block(response) {
        return Ok(json);
    }

    if let Some(json) = extract_balanced(response) {
        return Ok(json);
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON object found in model response"
    );

    Err(CaptionError::new(CaptionErrorKind::NoJson(response.len())).into())
}

/// Extract content from a markdown code block.
///
/// Looks for ```` ```json ```` first, then a bare ```` ``` ```` fence.
fn extract_from_code_block(response: &str) -> Option<String> {
    if let Some(start) = response.find("```json") {
        let content_start = start + "```json".len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence, likely a truncated response
        return Some(response[content_start..].trim().to_string());
    }

    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip past a language specifier line if one is present
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            let content = &response[skip_to..skip_to + end];
            return Some(content.trim().to_string());
        }
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract the first balanced `{ ... }` object, respecting string literals.
fn extract_balanced(response: &str) -> Option<String> {
    let start = response.find('{')?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse extracted JSON into a specific type.
///
/// # Errors
///
/// Returns an error if the JSON string cannot be parsed into type `T`.
///
/// # Examples
///
/// ```
/// use mucha_caption::parse_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Tag {
///     name: String,
/// }
///
/// let tag: Tag = parse_json(r##"{"name": "#tisk"}"##).unwrap();
/// assert_eq!(tag.name, "#tisk");
/// ```
pub fn parse_json<T>(json_str: &str) -> MuchaResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        JsonError::new(format!("Failed to parse JSON: {} (JSON: {}...)", e, preview)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_json_code_block() {
        let response = "Tady je JSON, který jste si vyžádali:\n\n```json\n{\n  \"caption\": \"Ahoj\"\n}\n```\n\nSnad pomůže!";
        let json = extract_json(response).unwrap();
        assert!(json.contains("\"caption\": \"Ahoj\""));
    }

    #[test]
    fn extracts_from_bare_code_block() {
        let response = "```\n{\"caption\": \"Ahoj\"}\n```";
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
    }

    #[test]
    fn extracts_balanced_braces() {
        let response = "Jasně! Tady: {\"caption\": \"Ahoj\", \"nested\": {\"x\": 1}}";
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(json.contains("nested"));
    }

    #[test]
    fn respects_string_escapes() {
        let response = r#"{"caption": "Řekla \"ahoj\""}"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("Řekla"));
    }

    #[test]
    fn truncated_code_block_returns_remainder() {
        let response = "```json\n{\"caption\": \"Ahoj\"}";
        let json = extract_json(response).unwrap();
        assert!(json.contains("caption"));
    }

    #[test]
    fn plain_text_is_an_error() {
        let result = extract_json("Toto je jen text bez JSON");
        assert!(result.is_err());
    }

    #[test]
    fn parses_into_struct() {
        use serde::Deserialize;

        #[derive(Debug, Deserialize)]
        struct Data {
            caption: String,
        }

        let data: Data = parse_json(r#"{"caption": "Ahoj"}"#).unwrap();
        assert_eq!(data.caption, "Ahoj");
    }

    #[test]
    fn parse_failure_is_an_error() {
        use serde::Deserialize;

        #[derive(Debug, Deserialize)]
        struct Data {
            #[allow(dead_code)]
            caption: String,
        }

        let result: MuchaResult<Data> = parse_json("{\"caption\": 42}");
        assert!(result.is_err());
    }
}
