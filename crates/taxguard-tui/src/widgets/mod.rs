//! Custom widget components

mod detection_form;
mod input;
mod login;
pub mod result;
mod status_bar;
mod welcome;

pub use detection_form::{DetectionFormView, SPINNER_FRAMES};
pub use input::InputLine;
pub use login::LoginScreen;
pub use result::{render_bar_chart, ResultScreenView};
pub use status_bar::StatusBar;
pub use welcome::WelcomeScreen;
