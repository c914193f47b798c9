//! taxguard-app - Application state and orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the four
//! screens (login, welcome, detection form, result), the screen navigator,
//! configuration loading and the background prediction task.

pub mod actions;
pub mod auth;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigator;
pub mod process;
pub mod result_view;
pub mod signals;
pub mod state;

// Re-export primary types
pub use auth::{AuthError, ConstantCredentialPolicy, CredentialPolicy, LoginFocus, LoginState};
pub use form::{DetectionForm, FormFocus, SubmissionId};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigator::{navigate, NavEvent, ResultScreen, Screen, ScreenKind};
pub use result_view::{ResultBody, ResultView};
pub use state::{AppPhase, AppState};
