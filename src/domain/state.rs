//! View state for one session: idle → loading → {result | error}.

use super::AnalysisResult;

/// What the UI shows. `result` and `error` are never both set once a
/// request has settled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
}

/// Which screen the state selects.
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Form {
        is_loading: bool,
        error: Option<&'a str>,
    },
    Dashboard(&'a AnalysisResult),
}

impl AnalysisState {
    /// Request is outstanding. Clears the previous error but leaves the result alone.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, result: AnalysisResult) {
        *self = AnalysisState {
            is_loading: false,
            error: None,
            result: Some(result),
        };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = AnalysisState {
            is_loading: false,
            error: Some(message.into()),
            result: None,
        };
    }

    /// "Analyze Another": drop the result only.
    pub fn reset(&mut self) {
        self.result = None;
    }

    pub fn view(&self) -> View<'_> {
        match &self.result {
            Some(result) => View::Dashboard(result),
            None => View::Form {
                is_loading: self.is_loading,
                error: self.error.as_deref(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            niche: "Retro Gaming".into(),
            target_audience: "Collectors".into(),
            channel_overview: "Retrospectives".into(),
            competitors: vec![],
            winning_patterns: vec![],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_idle_shows_form() {
        let state = AnalysisState::default();
        assert_eq!(
            state.view(),
            View::Form {
                is_loading: false,
                error: None
            }
        );
    }

    #[test]
    fn test_begin_clears_error() {
        let mut state = AnalysisState::default();
        state.fail("boom");
        state.begin();
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_succeed_then_fail_never_both_set() {
        let mut state = AnalysisState::default();
        state.begin();
        state.succeed(sample());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(state.result.is_some());

        state.begin();
        state.fail("boom");
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(state.result.is_none());
    }

    #[test]
    fn test_reset_returns_to_form() {
        let mut state = AnalysisState::default();
        state.succeed(sample());
        assert!(matches!(state.view(), View::Dashboard(r) if r.niche == "Retro Gaming"));
        state.reset();
        assert_eq!(
            state.view(),
            View::Form {
                is_loading: false,
                error: None
            }
        );
    }
}
