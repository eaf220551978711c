// src/flow/orchestrator.rs
//! Submission flow: run the upload and the terminal animation side by side, then act
//! on the reply once both are done. The user always waits at least the animation's
//! length, and never longer than the slower of the two.

use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::error::{SubmissionError, UPLOAD_FAILED_FALLBACK};
use super::{Cancellation, FileSelection, TerminalAnimation};
use crate::config::{ClientConfig, RouteConfig};
use crate::core::handoff::store_analysis;
use crate::core::{HandoffStore, UploadRequest, UploadTransport};
use crate::types::{AnalysisResult, UploadErrorBody, UploadResponse};
use crate::view::ViewState;

#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Submit with nothing selected
    Ignored,
    /// Payload stored and the view sent to the results page
    Completed {
        result: AnalysisResult,
        location: String,
    },
    Failed(SubmissionError),
}

impl SubmissionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmissionOutcome::Completed { .. })
    }
}

pub struct SubmissionOrchestrator {
    transport: Arc<dyn UploadTransport>,
    handoff: Arc<dyn HandoffStore>,
    animation: TerminalAnimation,
    routes: RouteConfig,
    request_timeout: Duration,
}

impl SubmissionOrchestrator {
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn UploadTransport>,
        handoff: Arc<dyn HandoffStore>,
    ) -> Self {
        Self {
            transport,
            handoff,
            animation: TerminalAnimation::new(&config.terminal),
            routes: config.routes.clone(),
            request_timeout: config.request_timeout(),
        }
    }

    pub fn animation(&self) -> &TerminalAnimation {
        &self.animation
    }

    pub async fn submit(
        &self,
        view: &mut ViewState,
        selection: &FileSelection,
        role: &str,
        cancel: &Cancellation,
    ) -> SubmissionOutcome {
        let Some(request) = selection.upload_request(role) else {
            warn!("Submit requested with no file selected");
            return SubmissionOutcome::Ignored;
        };

        let span = info_span!(
            "submission",
            submission_id = %Uuid::new_v4(),
            file = %request.file_name,
            role = %request.role
        );

        self.run(view, request, cancel).instrument(span).await
    }

    async fn run(
        &self,
        view: &mut ViewState,
        request: UploadRequest,
        cancel: &Cancellation,
    ) -> SubmissionOutcome {
        view.show_progress_surface();

        let (_, response) = tokio::join!(
            self.animation.play(view, cancel),
            self.upload_with_timeout(&request)
        );

        match self.settle(response).await {
            Ok(result) => {
                let location = self.routes.result.clone();
                info!("Analysis received (score {}), opening {}", result.score, location);
                view.navigate(location.clone());
                SubmissionOutcome::Completed { result, location }
            }
            Err(SubmissionError::SessionExpired) => {
                warn!("Upload bounced to login, session expired");
                view.notify(SubmissionError::SessionExpired.user_message());
                view.navigate(self.routes.login.clone());
                SubmissionOutcome::Failed(SubmissionError::SessionExpired)
            }
            Err(e) => {
                error!("Upload error: {}", e);
                view.notify(e.user_message());
                view.hide_progress_surface();
                SubmissionOutcome::Failed(e)
            }
        }
    }

    async fn upload_with_timeout(
        &self,
        request: &UploadRequest,
    ) -> Result<UploadResponse, SubmissionError> {
        match tokio::time::timeout(self.request_timeout, self.transport.upload(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(SubmissionError::Transport(e)),
            Err(_) => Err(SubmissionError::Timeout(self.request_timeout)),
        }
    }

    async fn settle(
        &self,
        response: Result<UploadResponse, SubmissionError>,
    ) -> Result<AnalysisResult, SubmissionError> {
        let result = classify_response(response?, &self.routes.login_marker)?;
        store_analysis(self.handoff.as_ref(), &result)
            .await
            .map_err(SubmissionError::Handoff)?;
        Ok(result)
    }
}

/// Decide what an upload reply means, in the order the checks must run
pub fn classify_response(
    response: UploadResponse,
    login_marker: &str,
) -> Result<AnalysisResult, SubmissionError> {
    if !response.is_json() {
        if response.looks_like_auth_redirect(login_marker) {
            return Err(SubmissionError::SessionExpired);
        }
        return Err(SubmissionError::ProtocolViolation {
            status: response.status,
        });
    }

    let body: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| SubmissionError::InvalidPayload(e.into()))?;

    if response.is_success() {
        return AnalysisResult::from_value(body).map_err(SubmissionError::InvalidPayload);
    }

    let message = serde_json::from_value::<UploadErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UPLOAD_FAILED_FALLBACK.to_string());

    Err(SubmissionError::Application {
        status: response.status,
        message,
    })
}
