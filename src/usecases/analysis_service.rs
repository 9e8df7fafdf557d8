//! Analysis service. Owns the session view state and the one call/response cycle.
//!
//! Form submit → gateway call → state update. The UI reads snapshots or
//! subscribes to changes.

use crate::domain::AnalysisState;
use crate::ports::AnalysisGateway;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank URL or a request already in flight. State untouched, no call made.
    Ignored,
    Succeeded,
    Failed,
}

/// Service mediating between the form and the analysis gateway.
///
/// At most one request is in flight: a submit while `is_loading` is set is ignored.
pub struct AnalysisService {
    gateway: Arc<dyn AnalysisGateway>,
    state: watch::Sender<AnalysisState>,
}

impl AnalysisService {
    /// Create a new analysis service with an idle state.
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        let (state, _) = watch::channel(AnalysisState::default());
        Self { gateway, state }
    }

    /// Current view state.
    pub fn snapshot(&self) -> AnalysisState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.state.subscribe()
    }

    /// Submit a URL for analysis and wait for the call to settle.
    pub async fn submit(&self, url: &str) -> Submission {
        let url = url.trim();
        if url.is_empty() {
            debug!("blank URL submitted, ignoring");
            return Submission::Ignored;
        }

        let mut started = false;
        self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            state.begin();
            started = true;
            true
        });
        if !started {
            warn!(url = %url, "analysis already in flight, ignoring submit");
            return Submission::Ignored;
        }

        info!(url = %url, "analysis started");
        match self.gateway.analyze(url).await {
            Ok(result) => {
                self.state.send_modify(|state| state.succeed(result));
                Submission::Succeeded
            }
            Err(e) => {
                self.state.send_modify(|state| state.fail(e.to_string()));
                Submission::Failed
            }
        }
    }

    /// "Analyze Another": discard the result and return to the form.
    pub fn reset(&self) {
        self.state.send_modify(AnalysisState::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockGateway, sample_analysis};
    use crate::domain::{ANALYSIS_FAILED_MESSAGE, View};
    use tokio::sync::Semaphore;

    fn service(gateway: &Arc<MockGateway>) -> AnalysisService {
        AnalysisService::new(Arc::clone(gateway) as Arc<dyn AnalysisGateway>)
    }

    #[tokio::test]
    async fn test_blank_url_is_ignored() {
        let gateway = Arc::new(MockGateway::succeeding(sample_analysis()));
        let svc = service(&gateway);

        for url in ["", "   ", "\t\n"] {
            assert_eq!(svc.submit(url).await, Submission::Ignored);
        }
        assert_eq!(gateway.calls(), 0);
        assert_eq!(svc.snapshot(), AnalysisState::default());
    }

    #[tokio::test]
    async fn test_success_populates_result() {
        let gateway = Arc::new(MockGateway::succeeding(sample_analysis()));
        let svc = service(&gateway);

        assert_eq!(svc.submit("https://youtube.com/@retro").await, Submission::Succeeded);
        let state = svc.snapshot();
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.result, Some(sample_analysis()));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_sets_generic_error_and_keeps_form() {
        let gateway = Arc::new(MockGateway::failing());
        let svc = service(&gateway);

        assert_eq!(svc.submit("https://youtube.com/@retro").await, Submission::Failed);
        let state = svc.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some(ANALYSIS_FAILED_MESSAGE));
        assert!(state.result.is_none());
        assert_eq!(
            state.view(),
            View::Form {
                is_loading: false,
                error: Some(ANALYSIS_FAILED_MESSAGE)
            }
        );
    }

    #[tokio::test]
    async fn test_loading_while_in_flight_and_second_submit_ignored() {
        let gate = Arc::new(Semaphore::new(0));
        let gateway =
            Arc::new(MockGateway::succeeding(sample_analysis()).with_gate(Arc::clone(&gate)));
        let svc = Arc::new(service(&gateway));
        let mut rx = svc.subscribe();

        let task = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.submit("https://youtube.com/@retro").await })
        };

        rx.wait_for(|s| s.is_loading).await.unwrap();
        assert!(svc.snapshot().is_loading);
        assert_eq!(svc.submit("https://youtube.com/@other").await, Submission::Ignored);

        gate.add_permits(1);
        assert_eq!(task.await.unwrap(), Submission::Succeeded);
        assert!(!svc.snapshot().is_loading);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_reset_returns_to_form() {
        let gateway = Arc::new(MockGateway::succeeding(sample_analysis()));
        let svc = service(&gateway);
        svc.submit("https://youtube.com/@retro").await;
        assert!(matches!(svc.snapshot().view(), View::Dashboard(_)));

        svc.reset();
        let state = svc.snapshot();
        assert!(state.result.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_new_submit_clears_previous_error() {
        let gate = Arc::new(Semaphore::new(0));
        let failing = Arc::new(MockGateway::failing());
        let svc = service(&failing);
        svc.submit("u").await;
        assert!(svc.snapshot().error.is_some());

        let held =
            Arc::new(MockGateway::succeeding(sample_analysis()).with_gate(Arc::clone(&gate)));
        let svc = Arc::new(AnalysisService {
            gateway: Arc::clone(&held) as Arc<dyn AnalysisGateway>,
            state: watch::channel(svc.snapshot()).0,
        });
        let mut rx = svc.subscribe();
        let task = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.submit("u").await })
        };
        let loading = rx.wait_for(|s| s.is_loading).await.unwrap().clone();
        assert!(loading.error.is_none());
        gate.add_permits(1);
        task.await.unwrap();
    }
}
