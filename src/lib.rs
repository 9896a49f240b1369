//! ChemAnalyzer - organobentonite selection for paints, lubricants and adhesives
//!
//! Sends a product name or a photo of its label to Gemini with a reference
//! knowledge block and a fixed JSON schema, and returns the structured
//! chemical analysis.

pub mod ai;
pub mod app;
pub mod error;
pub mod models;
pub mod prompts;
pub mod recommendation;

pub use error::{Error, Result};
