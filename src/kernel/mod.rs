//! Headless playground core (state/action/effect).

pub mod action;
pub mod effect;
pub mod error;
pub mod preview;
pub mod services;
pub mod snippet;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use error::PlaygroundError;
pub use snippet::integration_snippet;
pub use state::{CopyFeedback, CopyTarget, PlaygroundState, UiState, COPY_FEEDBACK};
pub use store::{DispatchResult, Store};
