//! Resume submission client: upload a resume for ATS analysis, hand the result to the
//! results view, and render the score, breakdown and suggestions.

pub mod cli;
pub mod config;
pub mod core;
pub mod flow;
pub mod render;
pub mod roles;
pub mod types;
pub mod view;

pub use config::ClientConfig;
pub use flow::{ResultPageBootstrapper, SubmissionOrchestrator, SubmissionOutcome};
pub use types::AnalysisResult;
