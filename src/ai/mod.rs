//! Model-backed product analysis
//!
//! [`AnalysisService`] is the seam callers depend on; the Gemini client is
//! the production implementation and [`MockAnalysisClient`] the test double.

pub mod gemini;
pub mod mime;
pub mod mock;
pub mod retry;

pub use gemini::{GeminiAnalysisClient, IMAGE_MODEL, TEXT_MODEL};
pub use mock::MockAnalysisClient;
pub use retry::{RetryPolicy, RetryState};

use crate::models::{AnalysisInput, AnalysisResult};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult>;
}
