use std::time::Duration;

use log::{debug, info, warn};

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::messages::Message;
use crate::common::models::ExplanationResult;

/// How long the success alert stays up before it's cleared.
pub const SUCCESS_LOG_TTL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Request lifecycle: Idle → Loading → (Succeeded | Failed) → Loading on the next submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Work the shell has to carry out after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch { topic: String },
    /// Clear the alert bar after `delay`, unless a newer request has started by then.
    ClearLogAfter { delay: Duration, request_id: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct ExplainerState {
    pub topic: String,
    pub result: Option<ExplanationResult>,
    pub loading: bool,
    pub theme: ThemeMode,
    pub phase: Phase,
    pub logger: Vec<LogMessage>,
    /// Bumped on every accepted submit; tags delayed `ClearLog` messages.
    pub request_id: u64,
}

impl ExplainerState {
    pub fn new(theme: ThemeMode) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.loading
    }

    /// Applies one message. Never performs I/O; the returned effect says what to run next.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::TopicChanged(topic) => {
                self.topic = topic;
                Effect::None
            }
            Message::Submit => self.submit(),
            Message::ExplanationReceived(Ok(result)) => self.succeed(result),
            Message::ExplanationReceived(Err(error)) => self.fail(error),
            Message::ThemeToggled => {
                self.theme = self.theme.toggled();
                Effect::None
            }
            Message::ClearLog(request_id) => {
                if request_id == self.request_id {
                    self.logger.clear();
                } else {
                    debug!("Stale ClearLog for request {} ignored (current {})", request_id, self.request_id);
                }
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if self.topic.is_empty() {
            return Effect::None;
        }
        if self.loading {
            debug!("Submit ignored: a request is already outstanding");
            return Effect::None;
        }

        info!("Requesting explanation for '{}'", self.topic);
        self.loading = true;
        self.result = None;
        self.phase = Phase::Loading;
        self.request_id += 1;
        self.logger.clear();
        self.logger.push(LogMessage {
            level: LogLevel::Info,
            message: format!("Generating explanation for \"{}\"...", self.topic),
        });
        Effect::Fetch { topic: self.topic.clone() }
    }

    fn succeed(&mut self, result: ExplanationResult) -> Effect {
        let missing = result.missing_known_sections();
        if !missing.is_empty() {
            debug!("Response is missing sections: {:?}", missing);
        }
        info!("Explanation received ({} sections)", result.len());

        self.logger.clear();
        self.logger.push(LogMessage {
            level: LogLevel::Success,
            message: format!("Explanation ready ({} sections)", result.len()),
        });
        self.result = Some(result);
        self.loading = false;
        self.phase = Phase::Succeeded;
        Effect::ClearLogAfter { delay: SUCCESS_LOG_TTL, request_id: self.request_id }
    }

    fn fail(&mut self, error: String) -> Effect {
        warn!("Explanation request failed: {}", error);
        self.logger.clear();
        self.logger.push(LogMessage {
            level: LogLevel::Error,
            message: error.clone(),
        });
        self.result = Some(ExplanationResult::fallback(error));
        self.loading = false;
        self.phase = Phase::Failed;
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::models::{SectionContent, ERROR_KEY, GENERATION_FAILED, KNOWN_SECTIONS};
    use serde_json::json;

    fn result_from(value: serde_json::Value) -> ExplanationResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn starts_idle_dark_and_empty() {
        let state = ExplainerState::default();
        assert_eq!(state.topic, "");
        assert!(state.result.is_none());
        assert!(!state.loading);
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn empty_topic_submit_changes_nothing() {
        let mut state = ExplainerState::default();
        let effect = state.update(Message::Submit);
        assert_eq!(effect, Effect::None);
        assert!(!state.loading);
        assert!(state.result.is_none());
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.logger.is_empty());
    }

    #[test]
    fn empty_topic_submit_keeps_previous_result() {
        let mut state = ExplainerState::default();
        state.result = Some(result_from(json!({"History": "old"})));
        state.update(Message::Submit);
        assert_eq!(state.result, Some(result_from(json!({"History": "old"}))));
    }

    #[test]
    fn submit_sets_loading_and_clears_result() {
        let mut state = ExplainerState::default();
        state.result = Some(result_from(json!({"History": "old"})));
        state.update(Message::TopicChanged("rust".into()));

        let effect = state.update(Message::Submit);

        assert_eq!(effect, Effect::Fetch { topic: "rust".into() });
        assert!(state.loading);
        assert!(state.result.is_none());
        assert_eq!(state.phase, Phase::Loading);
        assert!(!state.submit_enabled());
    }

    #[test]
    fn submit_while_loading_is_dropped() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("rust".into()));
        state.update(Message::Submit);
        state.update(Message::TopicChanged("go".into()));
        assert_eq!(state.update(Message::Submit), Effect::None);
        assert!(state.loading);
    }

    #[test]
    fn success_stores_result_and_clears_loading() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("rust".into()));
        state.update(Message::Submit);

        let effect = state.update(Message::ExplanationReceived(Ok(result_from(json!({"History": "h"})))));

        assert_eq!(effect, Effect::ClearLogAfter { delay: SUCCESS_LOG_TTL, request_id: 1 });
        assert!(!state.loading);
        assert_eq!(state.phase, Phase::Succeeded);
        assert_eq!(state.result, Some(result_from(json!({"History": "h"}))));
    }

    #[test]
    fn failure_stores_fallback_and_clears_loading() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("rust".into()));
        state.update(Message::Submit);

        state.update(Message::ExplanationReceived(Err("Failed to fetch response from backend".into())));

        assert!(!state.loading);
        assert_eq!(state.phase, Phase::Failed);
        let result = state.result.as_ref().unwrap();
        let labels: Vec<&str> = result.labels().collect();
        let mut expected: Vec<&str> = KNOWN_SECTIONS.to_vec();
        expected.push(ERROR_KEY);
        assert_eq!(labels, expected);
        assert_eq!(result.get("History"), Some(&SectionContent::Text(GENERATION_FAILED.into())));
        assert_eq!(result.error(), Some("Failed to fetch response from backend"));
        assert!(matches!(state.logger.last(), Some(LogMessage { level: LogLevel::Error, .. })));
    }

    #[test]
    fn sequential_submissions_replace_result() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("first".into()));
        state.update(Message::Submit);
        state.update(Message::ExplanationReceived(Ok(result_from(json!({"A": "1", "B": "2"})))));

        state.update(Message::TopicChanged("second".into()));
        state.update(Message::Submit);
        state.update(Message::ExplanationReceived(Ok(result_from(json!({"C": "3"})))));

        let labels: Vec<&str> = state.result.as_ref().unwrap().labels().collect();
        assert_eq!(labels, vec!["C"]);
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        let mut state = ExplainerState::default();
        state.update(Message::ThemeToggled);
        assert_eq!(state.theme, ThemeMode::Light);
        state.update(Message::ThemeToggled);
        assert!(state.theme.is_dark());
    }

    #[test]
    fn clear_log_empties_alerts() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("rust".into()));
        state.update(Message::Submit);
        assert!(!state.logger.is_empty());
        state.update(Message::ClearLog(state.request_id));
        assert!(state.logger.is_empty());
    }

    #[test]
    fn stale_clear_log_keeps_newer_request_status() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("first".into()));
        state.update(Message::Submit);
        let Effect::ClearLogAfter { request_id: first_id, .. } =
            state.update(Message::ExplanationReceived(Ok(result_from(json!({"History": "h"})))))
        else {
            panic!("success should schedule a clear");
        };

        state.update(Message::TopicChanged("second".into()));
        state.update(Message::Submit);
        state.update(Message::ClearLog(first_id));

        assert!(state.loading);
        assert_eq!(state.logger.len(), 1);
        assert_eq!(state.logger[0].level, LogLevel::Info);

        state.update(Message::ExplanationReceived(Err("Failed to fetch response from backend".into())));
        state.update(Message::ClearLog(first_id));
        assert!(matches!(state.logger.last(), Some(LogMessage { level: LogLevel::Error, .. })));
    }

    #[test]
    fn failure_after_success_drops_previous_sections() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("first".into()));
        state.update(Message::Submit);
        state.update(Message::ExplanationReceived(Ok(result_from(
            json!({"Extra": {"nested": true}, "History": "real history"}),
        ))));

        state.update(Message::TopicChanged("second".into()));
        state.update(Message::Submit);
        state.update(Message::ExplanationReceived(Err("connection reset".into())));

        let result = state.result.as_ref().unwrap();
        let labels: Vec<&str> = result.labels().collect();
        let mut expected: Vec<&str> = KNOWN_SECTIONS.to_vec();
        expected.push(ERROR_KEY);
        assert_eq!(labels, expected);
        assert!(result.get("Extra").is_none());
        assert_eq!(result.get("History"), Some(&SectionContent::Text(GENERATION_FAILED.into())));
    }

    #[test]
    fn repeated_failures_keep_a_single_alert() {
        let mut state = ExplainerState::default();
        state.update(Message::TopicChanged("rust".into()));
        for attempt in 0..3 {
            state.update(Message::Submit);
            state.update(Message::ExplanationReceived(Err(format!("failure {}", attempt))));
        }
        assert_eq!(state.logger.len(), 1);
        assert_eq!(state.logger[0].message, "failure 2");
    }
}
