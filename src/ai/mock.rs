use super::AnalysisService;
use crate::models::{AnalysisInput, AnalysisResult};
use crate::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted [`AnalysisService`] for exercising callers without a network.
///
/// Queued outcomes are returned in order; once the queue is empty every call
/// gets [`MockAnalysisClient::sample_result`].
#[derive(Clone)]
pub struct MockAnalysisClient {
    outcomes: Arc<Mutex<VecDeque<Result<AnalysisResult>>>>,
    inputs: Arc<Mutex<Vec<AnalysisInput>>>,
    delay: Option<Duration>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            inputs: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(result));
        self
    }

    pub fn with_error(self, error: crate::Error) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sleep before answering, to stand in for a slow upstream.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    pub fn received_inputs(&self) -> Vec<AnalysisInput> {
        self.inputs.lock().unwrap().clone()
    }

    pub fn sample_result() -> AnalysisResult {
        AnalysisResult {
            manufacturer: "ООО «Лакокраска»".to_string(),
            country: "Россия".to_string(),
            chemical_nature: "Алкидная (пентафталевая) эмаль".to_string(),
            purpose: "Окраска металлических и деревянных поверхностей".to_string(),
            medium_polarity: "Низкая".to_string(),
            medium_chemical_nature: "Алифатические углеводороды (уайт-спирит)".to_string(),
            organobentonite_brands: "801-D, Bentone 34, Claytone 40".to_string(),
            bentonite_base_type: "Бентонит (монтмориллонит)".to_string(),
            bentonite_properties: "Диоктаэдрический (Al), сероватый".to_string(),
            surfactant_nature: "Диметилдистеариламмоний хлорид".to_string(),
            application_notes: "Обязателен полярный активатор или прегель".to_string(),
            organobentonite_manufacturers: "Elementis (США), BYK (Германия)".to_string(),
        }
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisClient {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        self.inputs.lock().unwrap().push(input.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Self::sample_result()))
    }
}
