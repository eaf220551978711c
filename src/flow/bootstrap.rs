// src/flow/bootstrap.rs
//! Results page start-up: find the payload, then render it or bounce to the start

use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::Cancellation;
use crate::core::{HandoffStore, ANALYSIS_SLOT};
use crate::render::chart::render_breakdown_chart;
use crate::render::gauge::animate_score;
use crate::render::result::render_result;
use crate::types::AnalysisResult;
use crate::view::ViewState;

const EMBEDDED_MARKER: &str = "window.SERVER_DATA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    Embedded,
    Handoff,
}

#[derive(Debug)]
pub enum BootOutcome {
    Render {
        result: AnalysisResult,
        source: PayloadSource,
    },
    /// Nothing to show; the view has been sent to this path
    Redirect(String),
}

pub struct ResultPageBootstrapper {
    handoff: Arc<dyn HandoffStore>,
    root: String,
}

impl ResultPageBootstrapper {
    pub fn new(handoff: Arc<dyn HandoffStore>, root: impl Into<String>) -> Self {
        Self {
            handoff,
            root: root.into(),
        }
    }

    /// Embedded data wins over the handoff slot. No usable payload from either means
    /// a silent redirect, with nothing rendered.
    pub async fn bootstrap(&self, view: &mut ViewState, embedded: Option<Value>) -> BootOutcome {
        if let Some(value) = embedded.filter(|v| !v.is_null()) {
            match AnalysisResult::from_value(value) {
                Ok(result) => {
                    debug!("Using embedded analysis payload");
                    return BootOutcome::Render {
                        result,
                        source: PayloadSource::Embedded,
                    };
                }
                Err(e) => warn!("Ignoring embedded payload: {:#}", e),
            }
        }

        match self.read_handoff().await {
            Some(result) => BootOutcome::Render {
                result,
                source: PayloadSource::Handoff,
            },
            None => {
                info!("No analysis to show, redirecting to {}", self.root);
                view.navigate(self.root.clone());
                BootOutcome::Redirect(self.root.clone())
            }
        }
    }

    async fn read_handoff(&self) -> Option<AnalysisResult> {
        let raw = match self.handoff.read(ANALYSIS_SLOT).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read handoff slot: {:#}", e);
                return None;
            }
        };

        AnalysisResult::from_json(&raw)
            .map_err(|e| warn!("Stored analysis is unusable: {:#}", e))
            .ok()
    }

    /// Bootstrap, then fill every widget. The gauge animation runs to completion
    /// (or cancellation) before this returns.
    pub async fn load(
        &self,
        view: &mut ViewState,
        embedded: Option<Value>,
        cancel: &Cancellation,
    ) -> BootOutcome {
        let outcome = self.bootstrap(view, embedded).await;
        if let BootOutcome::Render { result, .. } = &outcome {
            show_result(view, result, cancel).await;
        }
        outcome
    }
}

pub async fn show_result(view: &mut ViewState, result: &AnalysisResult, cancel: &Cancellation) {
    render_result(view, result);
    render_breakdown_chart(view, result.breakdown.as_ref());
    animate_score(view, result.score, cancel).await;
}

/// Pull `window.SERVER_DATA = {...}` out of a server-rendered results page
pub fn extract_embedded_payload(html: &str) -> Option<Value> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script").ok()?;

    document.select(&selector).find_map(|script| {
        let text: String = script.text().collect();
        let start = text.find(EMBEDDED_MARKER)? + EMBEDDED_MARKER.len();
        let rest = text[start..].trim_start().strip_prefix('=')?;
        let value = serde_json::Deserializer::from_str(rest)
            .into_iter::<Value>()
            .next()?
            .ok()?;
        (!value.is_null()).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handoff::store_analysis;
    use crate::core::MemoryHandoffStore;
    use serde_json::json;

    fn sample(role: &str) -> AnalysisResult {
        AnalysisResult::from_value(json!({"role": role, "score": 64})).unwrap()
    }

    #[tokio::test]
    async fn test_missing_payload_redirects_to_root() {
        let bootstrapper = ResultPageBootstrapper::new(Arc::new(MemoryHandoffStore::new()), "/");
        let mut view = ViewState::new();

        let outcome = bootstrapper
            .load(&mut view, None, &Cancellation::new())
            .await;

        assert!(matches!(outcome, BootOutcome::Redirect(ref path) if path == "/"));
        assert_eq!(view.location.as_deref(), Some("/"));
        assert_eq!(view, ViewState { location: Some("/".to_string()), ..ViewState::new() });
    }

    #[tokio::test]
    async fn test_embedded_payload_wins() {
        let store = Arc::new(MemoryHandoffStore::new());
        store_analysis(store.as_ref(), &sample("Stored")).await.unwrap();
        let bootstrapper = ResultPageBootstrapper::new(store, "/");
        let mut view = ViewState::new();

        let outcome = bootstrapper
            .bootstrap(&mut view, Some(json!({"role": "Embedded", "score": 90})))
            .await;

        match outcome {
            BootOutcome::Render { result, source } => {
                assert_eq!(result.role, "Embedded");
                assert_eq!(source, PayloadSource::Embedded);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_embedded_payload_falls_back_to_handoff() {
        let store = Arc::new(MemoryHandoffStore::new());
        store_analysis(store.as_ref(), &sample("Stored")).await.unwrap();
        let bootstrapper = ResultPageBootstrapper::new(store, "/");
        let mut view = ViewState::new();

        let outcome = bootstrapper
            .bootstrap(&mut view, Some(json!({"role": "Embedded", "score": 250})))
            .await;

        match outcome {
            BootOutcome::Render { result, source } => {
                assert_eq!(result.role, "Stored");
                assert_eq!(source, PayloadSource::Handoff);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(view.location.is_none());
    }

    #[tokio::test]
    async fn test_handoff_payload_used_when_nothing_embedded() {
        let store = Arc::new(MemoryHandoffStore::new());
        store_analysis(store.as_ref(), &sample("Stored")).await.unwrap();
        let bootstrapper = ResultPageBootstrapper::new(store, "/");

        let outcome = bootstrapper
            .bootstrap(&mut ViewState::new(), Some(Value::Null))
            .await;
        assert!(matches!(
            outcome,
            BootOutcome::Render { source: PayloadSource::Handoff, .. }
        ));
    }

    #[tokio::test]
    async fn test_corrupt_handoff_is_treated_as_missing() {
        let store = Arc::new(MemoryHandoffStore::new());
        store.write(ANALYSIS_SLOT, "{oops").await.unwrap();
        let bootstrapper = ResultPageBootstrapper::new(store, "/");
        let mut view = ViewState::new();

        let outcome = bootstrapper.bootstrap(&mut view, None).await;
        assert!(matches!(outcome, BootOutcome::Redirect(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_renders_every_widget() {
        let store = Arc::new(MemoryHandoffStore::new());
        let payload = AnalysisResult::from_value(json!({
            "role": "Data Analyst",
            "score": 81,
            "breakdown": { "Keyword Match": 20, "Skills Match": 15 },
            "details": { "email": "x@y.z", "skills": ["SQL"] },
            "suggestions": { "missing_keywords": ["tableau"] }
        }))
        .unwrap();
        store_analysis(store.as_ref(), &payload).await.unwrap();
        let bootstrapper = ResultPageBootstrapper::new(store, "/");
        let mut view = ViewState::new();

        bootstrapper
            .load(&mut view, None, &Cancellation::new())
            .await;

        assert_eq!(view.role_label, "Data Analyst");
        assert_eq!(view.score_message, "Excellent! Ready for applications.");
        assert_eq!(view.score_display, "81");
        assert!(view.found_skills.contains("SQL"));
        assert!(view.missing_skills.contains("tableau"));
        assert_eq!(view.chart.as_ref().unwrap().labels.len(), 2);
        assert!(view.location.is_none());
    }

    #[test]
    fn test_extract_embedded_payload() {
        let html = r#"<html><head><script src="app.js"></script>
            <script>
              window.SERVER_DATA = {"role": "QA Engineer", "score": 55};
              console.log("ready");
            </script></head><body></body></html>"#;
        let value = extract_embedded_payload(html).unwrap();
        assert_eq!(value["role"], "QA Engineer");
    }

    #[test]
    fn test_extract_embedded_null_or_absent() {
        assert!(extract_embedded_payload("<script>window.SERVER_DATA = null;</script>").is_none());
        assert!(extract_embedded_payload("<p>no scripts</p>").is_none());
    }
}
