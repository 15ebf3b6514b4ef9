use tracing::{info, warn};

use crate::models::{Catalog, ExampleDescriptor};

use super::state::CopyTarget;
use super::{preview, snippet, Action, Effect, PlaygroundError, PlaygroundState};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    /// Set when the action was rejected and state left untouched.
    pub rejected: Option<PlaygroundError>,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
            rejected: None,
        }
    }

    fn with_effects(effects: Vec<Effect>, state_changed: bool) -> Self {
        Self {
            effects,
            state_changed,
            rejected: None,
        }
    }

    fn rejected(err: PlaygroundError) -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
            rejected: Some(err),
        }
    }
}

/// Owns one playground session: the injected read-only catalog plus the
/// session state. All transitions go through `dispatch`.
pub struct Store {
    catalog: Catalog,
    state: PlaygroundState,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        let state = PlaygroundState::new(&catalog);
        Self { catalog, state }
    }

    pub fn state(&self) -> &PlaygroundState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The descriptor for the selected example. `selected_id` is only ever
    /// assigned from catalog entries, so the fallback arm is unreachable in
    /// practice.
    pub fn selected_descriptor(&self) -> &ExampleDescriptor {
        self.catalog
            .lookup(&self.state.selected_id)
            .unwrap_or_else(|| self.catalog.default_example())
    }

    /// Remount token for the preview renderer; see `kernel::preview`.
    pub fn remount_key(&self) -> String {
        preview::remount_key(&self.state)
    }

    /// Merged config handed to the preview renderer.
    pub fn preview_config(&self) -> serde_json::Value {
        preview::preview_config(&self.selected_descriptor().config, self.state.sandbox_enabled)
    }

    /// Integration snippet for the selected example's canonical code.
    pub fn integration_snippet(&self) -> String {
        snippet::integration_snippet(self.selected_descriptor(), self.state.sandbox_enabled)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SelectExample { id } => {
                let Some(descriptor) = self.catalog.lookup(&id) else {
                    warn!(example = %id, "select rejected: unknown example");
                    return DispatchResult::rejected(PlaygroundError::UnknownExample(id));
                };
                info!(example = %descriptor.id, "select example");
                self.state.load_example(descriptor);
                DispatchResult::changed(true)
            }
            Action::ResetCurrent => {
                let Some(descriptor) = self.catalog.lookup(&self.state.selected_id) else {
                    return DispatchResult::changed(false);
                };
                info!(example = %descriptor.id, "reset to original code");
                self.state.load_example(descriptor);
                DispatchResult::changed(true)
            }
            Action::SetActiveFile { index } => match self.state.set_active_file(index) {
                Ok(changed) => DispatchResult::changed(changed),
                Err(err) => {
                    warn!(%err, "set_active_file rejected");
                    DispatchResult::rejected(err)
                }
            },
            Action::EditActiveDocument { text } => {
                DispatchResult::changed(self.state.edit_active_document(text))
            }
            Action::ToggleSandbox => {
                self.state.toggle_sandbox();
                DispatchResult::changed(true)
            }
            Action::RefreshPreview => {
                self.state.refresh();
                DispatchResult::changed(true)
            }
            Action::ShowSnippet => {
                if self.state.ui.snippet_visible {
                    return DispatchResult::changed(false);
                }
                self.state.ui.snippet_visible = true;
                DispatchResult::changed(true)
            }
            Action::CloseSnippet => {
                if !self.state.ui.snippet_visible {
                    return DispatchResult::changed(false);
                }
                self.state.ui.snippet_visible = false;
                DispatchResult::changed(true)
            }
            Action::CopyActiveFile { now } => {
                let (_, content) = self.state.active_document();
                let text = content.to_string();
                self.state.ui.mark_copied(CopyTarget::ActiveFile, now);
                DispatchResult::with_effects(vec![Effect::SetClipboardText(text)], true)
            }
            Action::CopySnippet { now } => {
                let text = self.integration_snippet();
                self.state.ui.mark_copied(CopyTarget::Snippet, now);
                DispatchResult::with_effects(vec![Effect::SetClipboardText(text)], true)
            }
            Action::ClipboardWriteFailed { reason } => {
                let err = PlaygroundError::ClipboardUnavailable(reason);
                warn!(%err, "copy failed");
                let state_changed = self.state.ui.clear_copy_feedback();
                DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                    rejected: Some(err),
                }
            }
            Action::Tick { now } => DispatchResult::changed(self.state.ui.tick(now)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
