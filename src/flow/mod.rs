// src/flow/mod.rs
//! Upload page and results page flows

pub mod bootstrap;
pub mod cancel;
pub mod error;
pub mod orchestrator;
pub mod selection;
pub mod terminal;

pub use bootstrap::{extract_embedded_payload, BootOutcome, PayloadSource, ResultPageBootstrapper};
pub use cancel::Cancellation;
pub use error::SubmissionError;
pub use orchestrator::{SubmissionOrchestrator, SubmissionOutcome};
pub use selection::{FileSelection, SelectedFile, SelectionSource};
pub use terminal::TerminalAnimation;
