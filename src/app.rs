//! Application orchestration: turn user input into an analysis report.

use crate::ai::{mime, AnalysisService, GeminiAnalysisClient};
use crate::models::{AnalysisInput, AnalysisResult, Config};
use crate::recommendation::kzpm_recommendation;
use crate::{Error, Result};
use base64::Engine as _;
use std::fmt::Write as _;
use std::future::Future;
use std::path::Path;
use tracing::{info, warn};

/// Analysis outcome plus the KZPM brand derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub result: AnalysisResult,
    pub recommendation: Option<&'static str>,
}

impl Report {
    pub fn new(result: AnalysisResult) -> Self {
        let recommendation = kzpm_recommendation(&result.medium_polarity);
        Self {
            result,
            recommendation,
        }
    }

    /// Human-readable report, one labelled field per line.
    pub fn render_text(&self) -> String {
        let mut out = String::from("Результаты анализа\n\n");
        for (label, value) in self.result.labelled_fields() {
            let _ = writeln!(out, "{}: {}", label, value);
        }
        if let Some(brand) = self.recommendation {
            let _ = writeln!(
                out,
                "\nСоответствующая марка органобентонита КЗПМ: {}",
                brand
            );
        }
        out
    }
}

/// Coordinates input preparation and the analysis service for one run.
pub struct App {
    analysis: Box<dyn AnalysisService>,
}

impl App {
    /// Build an app around any analysis service; tests inject mocks here.
    pub fn with_service(analysis: Box<dyn AnalysisService>) -> Self {
        Self { analysis }
    }

    pub fn new(config: &Config) -> Self {
        if config.api_key.is_none() {
            warn!("No Gemini API key configured; analysis requests will fail");
        }
        Self::with_service(Box::new(GeminiAnalysisClient::new(config)))
    }

    /// Product-name input; blank queries never reach the model.
    pub fn text_input(query: &str) -> Result<AnalysisInput> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("product name is empty".to_string()));
        }
        Ok(AnalysisInput::text(query))
    }

    /// Label-photo input read from disk and base64-encoded for upload.
    pub async fn image_input(path: &Path) -> Result<AnalysisInput> {
        let bytes = tokio::fs::read(path).await?;
        if bytes.is_empty() {
            return Err(Error::InvalidInput(format!(
                "image file {} is empty",
                path.display()
            )));
        }

        let mime_type = mime::image_mime_for(path, &bytes).ok_or_else(|| {
            Error::InvalidInput(format!(
                "{} is not a supported image (jpeg, png, webp, gif, heic)",
                path.display()
            ))
        })?;

        info!(
            "Loaded label image {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            mime_type
        );

        let data = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Ok(AnalysisInput::image(mime_type, data))
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> Result<Report> {
        let result = self.analysis.analyze(input).await?;
        Ok(Report::new(result))
    }

    /// Like [`App::analyze`], abandoned as soon as `cancel` completes.
    ///
    /// Dropping the analysis future aborts both a pending backoff sleep and
    /// the in-flight request.
    pub async fn analyze_until<F>(&self, input: &AnalysisInput, cancel: F) -> Result<Report>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            report = self.analyze(input) => report,
            _ = cancel => {
                warn!("Analysis cancelled");
                Err(Error::Cancelled)
            }
        }
    }
}
