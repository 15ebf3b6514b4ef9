use std::time::{Duration, Instant};

use compact_str::CompactString;

use crate::models::{Catalog, ExampleCode, ExampleDescriptor};

use super::error::PlaygroundError;

/// How long the "copied" indicator stays visible.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Fallback document name when an example is a single text (the editor
/// still needs a tab label).
pub const SINGLE_DOC_NAME: &str = "App.tsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    ActiveFile,
    Snippet,
}

#[derive(Debug, Clone, Copy)]
pub struct CopyFeedback {
    pub target: CopyTarget,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub snippet_visible: bool,
    pub copy_feedback: Option<CopyFeedback>,
}

impl UiState {
    pub fn mark_copied(&mut self, target: CopyTarget, now: Instant) {
        self.copy_feedback = Some(CopyFeedback {
            target,
            shown_at: now,
        });
    }

    pub fn clear_copy_feedback(&mut self) -> bool {
        self.copy_feedback.take().is_some()
    }

    /// Reverts an expired "copied" indicator. Returns true when it cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copy_feedback {
            Some(feedback) if now.duration_since(feedback.shown_at) >= COPY_FEEDBACK => {
                self.copy_feedback = None;
                true
            }
            _ => false,
        }
    }
}

/// Mutable state of one playground session.
///
/// Invariants:
/// - `selected_id` is always a valid catalog key.
/// - `code` and `active_file` change together with `selected_id`, never
///   independently.
/// - `active_file < code.file_count()`.
/// - `refresh_counter` strictly increases; toggling the sandbox bumps it
///   so a sandbox change always forces a preview remount.
#[derive(Debug, Clone)]
pub struct PlaygroundState {
    pub selected_id: CompactString,
    pub code: ExampleCode,
    pub active_file: usize,
    pub sandbox_enabled: bool,
    pub refresh_counter: u64,
    pub ui: UiState,
}

impl PlaygroundState {
    pub fn new(catalog: &Catalog) -> Self {
        let descriptor = catalog.default_example();
        Self {
            selected_id: descriptor.id.clone(),
            code: descriptor.code.clone(),
            active_file: descriptor.code.entry_index(),
            sandbox_enabled: true,
            refresh_counter: 0,
            ui: UiState::default(),
        }
    }

    /// Replaces the buffer with a pristine copy of `descriptor`'s code and
    /// moves the active file to its entry. Shared by example switch and
    /// reset; the catalog entry itself stays untouched.
    pub(crate) fn load_example(&mut self, descriptor: &ExampleDescriptor) {
        self.selected_id = descriptor.id.clone();
        self.code = descriptor.code.clone();
        self.active_file = descriptor.code.entry_index();
    }

    /// Switches the active document. Out-of-range indices are rejected
    /// without touching state; for single-text code only index 0 exists.
    pub fn set_active_file(&mut self, index: usize) -> Result<bool, PlaygroundError> {
        let len = self.code.file_count();
        if index >= len {
            return Err(PlaygroundError::InvalidFileIndex { index, len });
        }
        let changed = self.active_file != index;
        self.active_file = index;
        Ok(changed)
    }

    /// Replaces the active document's text. In file-sequence mode only the
    /// active entry's content changes; every other entry (name, content,
    /// entry marker, order) stays byte-identical.
    pub fn edit_active_document(&mut self, text: String) -> bool {
        match &mut self.code {
            ExampleCode::Single(current) => {
                if *current == text {
                    return false;
                }
                *current = text;
                true
            }
            ExampleCode::Files(files) => {
                let Some(entry) = files.get_mut(self.active_file) else {
                    return false;
                };
                if entry.content == text {
                    return false;
                }
                entry.content = text;
                true
            }
        }
    }

    pub fn toggle_sandbox(&mut self) {
        self.sandbox_enabled = !self.sandbox_enabled;
        self.refresh_counter += 1;
    }

    pub fn refresh(&mut self) {
        self.refresh_counter += 1;
    }

    /// The document currently shown in the editor: (name, content).
    pub fn active_document(&self) -> (&str, &str) {
        match &self.code {
            ExampleCode::Single(text) => (SINGLE_DOC_NAME, text.as_str()),
            ExampleCode::Files(files) => {
                let i = self.active_file.min(files.len().saturating_sub(1));
                (files[i].name.as_str(), files[i].content.as_str())
            }
        }
    }
}
