use std::time::Instant;

use compact_str::CompactString;

/// Discrete user actions. Every transition in the kernel happens in
/// response to one of these, synchronously.
#[derive(Debug, Clone)]
pub enum Action {
    SelectExample { id: CompactString },
    ResetCurrent,
    SetActiveFile { index: usize },
    EditActiveDocument { text: String },
    ToggleSandbox,
    RefreshPreview,
    ShowSnippet,
    CloseSnippet,
    CopyActiveFile { now: Instant },
    CopySnippet { now: Instant },
    ClipboardWriteFailed { reason: String },
    Tick { now: Instant },
}
