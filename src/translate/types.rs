//! JSON shapes exchanged with callers and with the Google Cloud Translation API.

use serde::{Deserialize, Serialize};

/// Body accepted on `POST /translate`, and forwarded verbatim to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(rename = "q", alias = "Q", default)]
    pub text: String,
    #[serde(alias = "Target", alias = "TARGET", default)]
    pub target: String,
}

/// Single translation result returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub detected_language: String,
    pub translation: String,
}

// ---------------------------------------------------------------------------
// Provider response envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub data: ProviderData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderData {
    #[serde(default)]
    pub translations: Vec<ProviderTranslation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderTranslation {
    #[serde(default)]
    pub detected_source_language: String,
    #[serde(default)]
    pub translated_text: String,
}

impl From<ProviderTranslation> for Translation {
    fn from(t: ProviderTranslation) -> Self {
        Self {
            detected_language: t.detected_source_language,
            translation: t.translated_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_names() {
        let req = TranslationRequest {
            text: "hello world".to_string(),
            target: "de".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"q": "hello world", "target": "de"})
        );
    }

    #[test]
    fn test_request_missing_fields_are_empty() {
        let req: TranslationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
        assert_eq!(req.target, "");
    }

    #[test]
    fn test_request_accepts_capitalised_keys() {
        let req: TranslationRequest =
            serde_json::from_str(r#"{"Q":"hi","Target":"de"}"#).unwrap();
        assert_eq!(req.text, "hi");
        assert_eq!(req.target, "de");

        let req: TranslationRequest = serde_json::from_str(r#"{"q":"hi","TARGET":"fr"}"#).unwrap();
        assert_eq!(req.target, "fr");
    }

    #[test]
    fn test_translation_wire_names() {
        let t = Translation {
            detected_language: "en".to_string(),
            translation: "Hallo Welt".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({"detectedLanguage": "en", "translation": "Hallo Welt"})
        );
    }

    #[test]
    fn test_envelope_parses_provider_shape() {
        let body = r#"{"data":{"translations":[
            {"detectedSourceLanguage":"en","translatedText":"Hallo Welt"},
            {"detectedSourceLanguage":"en","translatedText":"Servus Welt"}
        ]}}"#;
        let resp: ProviderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.translations.len(), 2);
        assert_eq!(resp.data.translations[0].translated_text, "Hallo Welt");
    }

    #[test]
    fn test_envelope_without_data_is_empty() {
        let resp: ProviderResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.translations.is_empty());
    }
}
