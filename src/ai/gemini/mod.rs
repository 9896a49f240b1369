pub mod analysis;
pub mod client;
pub mod schema;
pub mod types;

pub use analysis::{GeminiAnalysisClient, IMAGE_MODEL, TEXT_MODEL};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::AnalysisResult;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockBuilder, ResponseTemplate};

    pub const GENERATE_CONTENT_PATH_REGEX: &str = r"^/v1beta/models/[^/]+:generateContent$";

    pub fn post_path_regex(pattern: &str) -> MockBuilder {
        Mock::given(method("POST")).and(path_regex(pattern))
    }

    /// Successful envelope whose single text part is `text`.
    pub fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": text }]
                },
                "finishReason": "STOP"
            }]
        }))
    }

    pub fn payload_response(payload: &serde_json::Value) -> ResponseTemplate {
        text_response(&payload.to_string())
    }

    pub fn quota_response() -> ResponseTemplate {
        ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        }))
    }

    pub fn sample_payload() -> serde_json::Value {
        serde_json::json!({
            "manufacturer": "ООО «Ярославский лакокрасочный завод»",
            "country": "Россия",
            "chemicalNature": "Алкидная (пентафталевая) эмаль",
            "purpose": "Окраска металлических и деревянных поверхностей",
            "mediumPolarity": "Низкая",
            "mediumChemicalNature": "Уайт-спирит, сольвент",
            "organobentoniteBrands": "801-D, Bentone 34, Claytone 40",
            "bentoniteBaseType": "Бентонит (монтмориллонит)",
            "bentoniteProperties": "Диоктаэдрический (Al), сероватый, дешевый",
            "surfactantNature": "Диметилдистеариламмоний хлорид",
            "applicationNotes": "Обязателен полярный активатор (метанол/вода) или прегель",
            "organobentoniteManufacturers": "Elementis (США), BYK (Германия), Китай"
        })
    }

    pub fn sample_result() -> AnalysisResult {
        serde_json::from_value(sample_payload()).unwrap()
    }
}
