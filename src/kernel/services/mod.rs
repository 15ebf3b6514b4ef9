//! Services layer (ports only).
//!
//! `ports`: pure contracts/types the host shell implements (editor widget,
//! preview renderer, clipboard). The implementations live outside this
//! crate.

pub mod ports;

pub use ports::{
    AmbientLib, ClipboardError, ClipboardPort, EditorHost, EditorSetup, PreviewHost,
};

use tracing::warn;

use super::{Action, Effect};

/// Drives requested effects against the host clipboard. A failed write is
/// logged and translated into the follow-up action to dispatch; it never
/// blocks other transitions.
pub fn run_effects(effects: Vec<Effect>, clipboard: &mut dyn ClipboardPort) -> Option<Action> {
    for effect in effects {
        match effect {
            Effect::SetClipboardText(text) => {
                if let Err(err) = clipboard.set_text(&text) {
                    warn!(%err, "clipboard write failed");
                    return Some(Action::ClipboardWriteFailed {
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
    None
}
