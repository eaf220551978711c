pub mod analysis;
pub mod response;

pub use analysis::{AnalysisResult, Details, Suggestions};
pub use response::{UploadErrorBody, UploadResponse};
