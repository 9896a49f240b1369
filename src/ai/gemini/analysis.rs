use super::client::GeminiHttpClient;
use super::schema::analysis_schema;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
    Tool,
};
use crate::ai::retry::RetryPolicy;
use crate::ai::AnalysisService;
use crate::models::{AnalysisInput, AnalysisResult, Config};
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use tracing::{debug, error, info, warn};

/// Fast model for product-name lookups.
pub const TEXT_MODEL: &str = "gemini-3-flash-preview";
/// Higher-capability model for reading label photos.
pub const IMAGE_MODEL: &str = "gemini-3.1-pro-preview";

/// Gemini-backed [`AnalysisService`].
pub struct GeminiAnalysisClient {
    http: GeminiHttpClient,
    api_key: Option<String>,
    retry: RetryPolicy,
}

impl GeminiAnalysisClient {
    pub fn new(config: &Config) -> Self {
        Self::new_with_client(config, reqwest::Client::new())
    }

    pub fn new_with_client(config: &Config, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new(config.base_url.clone(), config.request_timeout, client),
            api_key: config.api_key.clone(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn model_for(input: &AnalysisInput) -> &'static str {
        match input {
            AnalysisInput::Image { .. } => IMAGE_MODEL,
            AnalysisInput::Text(_) => TEXT_MODEL,
        }
    }

    fn build_request(input: &AnalysisInput, search: bool) -> GenerateContentRequest {
        let parts = match input {
            AnalysisInput::Image { mime_type, data } => vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.clone(),
                        data: data.clone(),
                    },
                },
                Part::Text {
                    text: prompts::image_prompt(),
                },
            ],
            AnalysisInput::Text(query) => vec![Part::Text {
                text: prompts::text_prompt(query),
            }],
        };

        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: prompts::system_instruction(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
            tools: if search {
                vec![Tool::google_search()]
            } else {
                Vec::new()
            },
        }
    }

    async fn generate_with_retry(
        &self,
        api_key: &str,
        model: &str,
        input: &AnalysisInput,
    ) -> Result<GenerateContentResponse> {
        let mut state = self.retry.start();

        loop {
            let request = Self::build_request(input, state.search_enabled());
            debug!(
                "Sending analysis request to {} (attempt {}, search: {})",
                model,
                state.attempt(),
                state.search_enabled()
            );

            let err = match self.http.generate_content(api_key, model, &request).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_quota_exhausted() => err,
                Err(err) => return Err(err),
            };

            match state.next_backoff() {
                Some(wait) => {
                    warn!(
                        "Quota exceeded. Retrying in {}ms... ({} attempts left)",
                        wait.as_millis(),
                        state.remaining() + 1
                    );
                    tokio::time::sleep(wait).await;
                }
                None => {
                    error!(
                        "Quota still exhausted after {} attempts",
                        state.attempt()
                    );
                    return Err(err);
                }
            }
        }
    }

    fn extract_text(response: &GenerateContentResponse) -> Result<String> {
        let text = response.text();
        if text.trim().is_empty() {
            let reason = response.block_reason().unwrap_or("no text returned");
            return Err(Error::EmptyResponse(format!(
                "the request was likely blocked by safety filters ({})",
                reason
            )));
        }
        Ok(text)
    }

    fn parse_result(text: &str) -> Result<AnalysisResult> {
        serde_json::from_str(strip_code_fence(text)).map_err(|e| {
            error!("Analysis payload did not match schema: {}\nPayload: {}", e, text);
            Error::MalformedResponse(e.to_string())
        })
    }
}

/// Unwrap a reply fenced as a markdown code block; other text passes through.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") on the opening fence line.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

#[async_trait]
impl AnalysisService for GeminiAnalysisClient {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                error!("GEMINI_API_KEY is missing");
                Error::missing_api_key()
            })?;

        let model = Self::model_for(input);
        let response = self.generate_with_retry(api_key, model, input).await?;
        let text = Self::extract_text(&response)?;
        let result = Self::parse_result(&text)?;

        info!(
            "Analysis complete: {} / polarity: {}",
            result.chemical_nature, result.medium_polarity
        );
        Ok(result)
    }
}
