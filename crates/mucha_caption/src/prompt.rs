//! The fixed instruction template for caption generation.

use crate::Platform;

/// Build the caption generation prompt for a platform and draft text.
///
/// The template is fixed: Czech language, "Social Media Manager" persona,
/// emoji where fitting, 5-10 Czech hashtags in `#hashtag` form, and exactly
/// one engagement tip. The trailing instruction pins the model to a single
/// JSON object matching [`crate::CaptionSuggestion`]'s wire shape, which is
/// what [`crate::extract_json`] recovers from the response.
///
/// # Examples
///
/// ```
/// use mucha_caption::{caption_prompt, Platform};
///
/// let prompt = caption_prompt(Platform::Instagram, "Akce na tisk vizitek");
/// assert!(prompt.contains("Instagram"));
/// assert!(prompt.contains("Akce na tisk vizitek"));
/// ```
pub fn caption_prompt(platform: Platform, text: &str) -> String {
    format!(
        r#"Role: Jsi profesionální Social Media Manager.
Cíl: Transformuj surový nápad uživatele do vysoce kvalitního příspěvku pro {platform}.
Jazyk: Vždy komunikuj v češtině.

Kontext od uživatele: "{text}"
Platforma: {platform}

Instrukce:
1. Vytvoř poutavý popisek optimalizovaný pro {platform} (používej emoji, kde se to hodí).
2. Navrhni 5-10 populárních českých hashtagů ve formátu #hashtag.
3. Poskytni jeden krátký tip pro zvýšení engagement a dosahu.

Výstup: Odpověz POUZE platným JSON objektem ve tvaru
{{"caption": string, "hashtags": string[], "engagementTip": string}}
bez jakéhokoli dalšího textu.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_platform_display_name() {
        let prompt = caption_prompt(Platform::Facebook, "ahoj");
        assert!(prompt.contains("příspěvku pro Facebook"));
        assert!(prompt.contains("Platforma: Facebook"));
    }

    #[test]
    fn interpolates_user_text() {
        let prompt = caption_prompt(Platform::Instagram, "Akce na tisk vizitek");
        assert!(prompt.contains("Kontext od uživatele: \"Akce na tisk vizitek\""));
    }

    #[test]
    fn requests_json_only_output() {
        let prompt = caption_prompt(Platform::Instagram, "");
        assert!(prompt.contains("POUZE platným JSON"));
        assert!(prompt.contains("engagementTip"));
    }

    #[test]
    fn fixes_hashtag_range() {
        let prompt = caption_prompt(Platform::Facebook, "");
        assert!(prompt.contains("5-10"));
    }
}
