//! Application state (Model in TEA pattern)

use taxguard_core::prelude::*;

use crate::auth::{ConstantCredentialPolicy, CredentialPolicy};
use crate::config::Settings;
use crate::form::SubmissionId;
use crate::navigator::{navigate, NavEvent, Screen, ScreenKind};

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// The active screen and everything it owns
    pub screen: Screen,

    pub phase: AppPhase,

    pub settings: Settings,

    /// Base URL shown in the status bar
    pub server_label: String,

    /// Advanced on every tick while a request is pending
    pub spinner_frame: usize,

    credential_policy: Box<dyn CredentialPolicy>,

    next_submission: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::default(),
            phase: AppPhase::Running,
            server_label: settings.service.base_url.clone(),
            settings,
            spinner_frame: 0,
            credential_policy: Box::new(ConstantCredentialPolicy::default()),
            next_submission: 0,
        }
    }

    /// Swap the credential check
    pub fn with_credential_policy(mut self, policy: Box<dyn CredentialPolicy>) -> Self {
        self.credential_policy = policy;
        self
    }

    pub fn credential_policy(&self) -> &dyn CredentialPolicy {
        self.credential_policy.as_ref()
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// True while the detection form has a request in flight
    pub fn is_loading(&self) -> bool {
        matches!(&self.screen, Screen::Detection(form) if form.is_loading())
    }

    pub fn allocate_submission_id(&mut self) -> SubmissionId {
        self.next_submission += 1;
        SubmissionId(self.next_submission)
    }

    /// Run the navigator over the current screen.
    ///
    /// A fresh detection form gets the configured default model.
    pub fn navigate(&mut self, event: NavEvent) {
        let from = self.screen.kind();
        let current = std::mem::take(&mut self.screen);
        self.screen = navigate(current, event);

        let to = self.screen.kind();
        if from != to {
            debug!("Screen {} -> {}", from.title(), to.title());
            if let (Screen::Detection(form), Some(model)) =
                (&mut self.screen, self.settings.ui.default_model)
            {
                form.record.select_model(model);
            }
        }
    }

    /// Stop the event loop and cancel any pending request
    pub fn request_quit(&mut self) {
        if let Screen::Detection(form) = &mut self.screen {
            if let Some(id) = form.cancel_pending() {
                debug!("Cancelled submission {} on quit", id);
            }
        }
        self.phase = AppPhase::Quitting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxguard_core::ModelType;

    #[test]
    fn test_starts_on_login() {
        let state = AppState::new();
        assert_eq!(state.screen_kind(), ScreenKind::Login);
        assert!(!state.should_quit());
        assert_eq!(state.server_label, "http://localhost:5000");
    }

    #[test]
    fn test_submission_ids_increase() {
        let mut state = AppState::new();
        let a = state.allocate_submission_id();
        let b = state.allocate_submission_id();
        assert!(b > a);
    }

    #[test]
    fn test_default_model_preselected_on_new_form() {
        let mut settings = Settings::default();
        settings.ui.default_model = Some(ModelType::Svm);
        let mut state = AppState::with_settings(settings);
        state.screen = Screen::Welcome;

        state.navigate(NavEvent::Enter);

        match &state.screen {
            Screen::Detection(form) => assert_eq!(form.record.model_type, Some(ModelType::Svm)),
            other => panic!("expected detection screen, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_noop_navigation_keeps_screen() {
        let mut state = AppState::new();
        state.navigate(NavEvent::Home);
        assert_eq!(state.screen_kind(), ScreenKind::Login);
    }
}
