use serde::{Deserialize, Serialize};

// ===== Upload Service Response Types =====

/// Body of a handled failure from the upload endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadErrorBody {
    pub error: Option<String>,
}

/// What the client keeps of an HTTP reply before deciding how to react to it
#[derive(Debug, Clone)]
pub struct UploadResponse {
    pub status: u16,
    pub content_type: Option<String>,
    /// Final URL after redirects
    pub url: String,
    pub body: String,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// A missing content type is not treated as "not JSON"; the body gets parsed anyway.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map_or(true, |ct| ct.contains("application/json"))
    }

    pub fn looks_like_auth_redirect(&self, login_marker: &str) -> bool {
        self.status == 401 || self.status == 403 || self.url.contains(login_marker)
    }
}
