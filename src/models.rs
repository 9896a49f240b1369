//! Data models and structures
//!
//! Defines the analysis input and result records and the process-wide
//! configuration handed to the analysis client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// What the user asked about: a product name or a photo of its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Text(String),
    /// `data` is the base64-encoded image body.
    Image { mime_type: String, data: String },
}

impl AnalysisInput {
    pub fn text(query: impl Into<String>) -> Self {
        AnalysisInput::Text(query.into())
    }

    pub fn image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        AnalysisInput::Image {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, AnalysisInput::Image { .. })
    }
}

/// Structured chemical analysis of a product. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub manufacturer: String,
    pub country: String,
    pub chemical_nature: String,
    pub purpose: String,
    pub medium_polarity: String,
    pub medium_chemical_nature: String,
    pub organobentonite_brands: String,
    pub bentonite_base_type: String,
    pub bentonite_properties: String,
    pub surfactant_nature: String,
    pub application_notes: String,
    pub organobentonite_manufacturers: String,
}

impl AnalysisResult {
    /// Field values paired with their Russian display labels, in report order.
    pub fn labelled_fields(&self) -> [(&'static str, &str); 12] {
        [
            ("Производитель", &self.manufacturer),
            ("Страна", &self.country),
            ("Химическая природа", &self.chemical_nature),
            ("Назначение", &self.purpose),
            ("Полярность среды", &self.medium_polarity),
            ("Природа среды", &self.medium_chemical_nature),
            ("Марки органобентонита", &self.organobentonite_brands),
            ("Тип бентонитовой основы", &self.bentonite_base_type),
            ("Физ-хим свойства основы", &self.bentonite_properties),
            ("Природа катионного ПАВ", &self.surfactant_nature),
            ("Особенности применения", &self.application_notes),
            (
                "Производители органобентонита",
                &self.organobentonite_manufacturers,
            ),
        ]
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: resolve_api_key(Some(api_key.into()), None),
            ..Self::default()
        }
    }

    /// Resolve configuration from the environment (and `.env` when present).
    ///
    /// A missing key is not an error here; the client reports it on use.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let request_timeout = match std::env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                crate::Error::Configuration(format!(
                    "GEMINI_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key: resolve_api_key(
                std::env::var("GEMINI_API_KEY").ok(),
                std::env::var("VITE_GEMINI_API_KEY").ok(),
            ),
            base_url: resolve_base_url(std::env::var("GEMINI_BASE_URL").ok()),
            request_timeout,
        })
    }
}

/// Pick the first usable key. Blank values and the literal `undefined`
/// (left behind by front-end build tooling) count as absent.
pub fn resolve_api_key(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty() && key != "undefined")
}

/// Endpoint override, falling back to the public API when unset or blank.
pub fn resolve_base_url(configured: Option<String>) -> String {
    configured
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "manufacturer": "Лакокраска",
            "country": "Россия",
            "chemicalNature": "Алкидная",
            "purpose": "Эмаль",
            "mediumPolarity": "Низкая",
            "mediumChemicalNature": "Уайт-спирит",
            "organobentoniteBrands": "Bentone 34",
            "bentoniteBaseType": "Монтмориллонит",
            "bentoniteProperties": "Диоктаэдрический",
            "surfactantNature": "Диметилдистеариламмоний хлорид",
            "applicationNotes": "Нужен активатор",
            "organobentoniteManufacturers": "Elementis, США"
        })
    }

    #[test]
    fn test_result_deserializes_camel_case() {
        let result: AnalysisResult = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(result.chemical_nature, "Алкидная");
        assert_eq!(result.organobentonite_manufacturers, "Elementis, США");
    }

    #[test]
    fn test_result_rejects_missing_field() {
        let mut json = sample_json();
        json.as_object_mut().unwrap().remove("surfactantNature");
        assert!(serde_json::from_value::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_result_rejects_null_field() {
        let mut json = sample_json();
        json["country"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_result_serializes_back_to_wire_names() {
        let result: AnalysisResult = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), sample_json());
    }

    #[test]
    fn test_labelled_fields_covers_every_field() {
        let result: AnalysisResult = serde_json::from_value(sample_json()).unwrap();
        let fields = result.labelled_fields();
        assert_eq!(fields[4], ("Полярность среды", "Низкая"));
        assert!(fields.iter().all(|(_, value)| !value.is_empty()));
    }

    #[test]
    fn test_input_kind() {
        assert!(!AnalysisInput::text("ПФ-115").is_image());
        assert!(AnalysisInput::image("image/jpeg", "AAAA").is_image());
    }

    #[test]
    fn test_resolve_api_key_prefers_primary() {
        assert_eq!(
            resolve_api_key(Some("primary".into()), Some("fallback".into())),
            Some("primary".to_string())
        );
    }

    #[test]
    fn test_resolve_api_key_skips_blank_and_undefined() {
        assert_eq!(
            resolve_api_key(Some("  ".into()), Some("fallback".into())),
            Some("fallback".to_string())
        );
        assert_eq!(
            resolve_api_key(Some("undefined".into()), None),
            None
        );
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn test_blank_base_url_falls_back_to_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("".into())), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("  ".into())), DEFAULT_BASE_URL);
        assert_eq!(
            resolve_base_url(Some(" http://localhost:8080 ".into())),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_with_api_key_normalizes_value() {
        assert_eq!(Config::with_api_key(" key ").api_key.as_deref(), Some("key"));
        assert_eq!(Config::with_api_key("undefined").api_key, None);
        assert_eq!(Config::default().base_url, DEFAULT_BASE_URL);
    }
}
