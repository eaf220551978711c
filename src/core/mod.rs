// src/core/mod.rs
//! Storage and network plumbing used by the submission and results flows

pub mod fs_ops;
pub mod handoff;
pub mod service_client;

pub use fs_ops::FsOps;
pub use handoff::{FileHandoffStore, HandoffStore, MemoryHandoffStore, ANALYSIS_SLOT};
pub use service_client::{HttpUploadClient, UploadRequest, UploadTransport};
