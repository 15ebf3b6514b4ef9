use super::*;
use crate::kernel::services::{run_effects, ClipboardError, ClipboardPort};
use crate::kernel::state::COPY_FEEDBACK;
use crate::models::{Catalog, ExampleCode, ExampleConfig, FileEntry};
use compact_str::CompactString;
use std::time::{Duration, Instant};

fn single(id: &str, category: &str, code: &str) -> ExampleDescriptor {
    ExampleDescriptor {
        id: CompactString::new(id),
        title: id.to_string(),
        description: String::new(),
        category: CompactString::new(category),
        code: ExampleCode::Single(code.to_string()),
        config: ExampleConfig::default(),
    }
}

// Entry file sits at index 1 on purpose, so entry selection is observable.
fn dashboard() -> ExampleDescriptor {
    ExampleDescriptor {
        id: CompactString::new("dashboard"),
        title: "Dashboard".to_string(),
        description: String::new(),
        category: CompactString::new("Advanced"),
        code: ExampleCode::Files(vec![
            FileEntry::new("components/Header.tsx", "export default () => <header />;"),
            FileEntry::entry("App.tsx", "export default () => <main />;"),
            FileEntry::new("components/Stats.tsx", "export default () => <dl />;"),
        ]),
        config: ExampleConfig::default(),
    }
}

fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        single("todo", "Applications", "export default function Todo() { return <ul />; }"),
        dashboard(),
    ])
    .unwrap()
}

fn new_store() -> Store {
    Store::new(fixture_catalog())
}

fn select(store: &mut Store, id: &str) {
    let result = store.dispatch(Action::SelectExample {
        id: CompactString::new(id),
    });
    assert!(result.rejected.is_none());
}

struct CapturingClipboard {
    written: Vec<String>,
}

impl ClipboardPort for CapturingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.written.push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardPort for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotAvailable)
    }
}

#[test]
fn new_store_loads_default_example() {
    let store = new_store();
    assert_eq!(store.state().selected_id, "todo");
    assert_eq!(store.state().code, store.catalog().lookup("todo").unwrap().code);
    assert_eq!(store.state().active_file, 0);
    assert!(store.state().sandbox_enabled);
    assert_eq!(store.state().refresh_counter, 0);
}

#[test]
fn select_copies_pristine_code_for_every_entry() {
    let mut store = new_store();
    let ids: Vec<CompactString> = store
        .catalog()
        .entries()
        .iter()
        .map(|e| e.id.clone())
        .collect();

    for id in ids {
        let result = store.dispatch(Action::SelectExample { id: id.clone() });
        assert!(result.state_changed);
        let original = store.catalog().lookup(&id).unwrap();
        assert_eq!(store.state().selected_id, original.id);
        assert_eq!(store.state().code, original.code);
    }
}

#[test]
fn select_moves_active_file_to_entry() {
    let mut store = new_store();
    select(&mut store, "dashboard");
    assert_eq!(store.state().active_file, 1);
}

#[test]
fn select_unknown_id_leaves_state_unchanged() {
    let mut store = new_store();
    let id_before = store.state().selected_id.clone();
    let code_before = store.state().code.clone();

    let result = store.dispatch(Action::SelectExample {
        id: CompactString::new("missing"),
    });

    assert!(!result.state_changed);
    assert_eq!(
        result.rejected,
        Some(PlaygroundError::UnknownExample(CompactString::new("missing")))
    );
    assert_eq!(store.state().selected_id, id_before);
    assert_eq!(store.state().code, code_before);
}

#[test]
fn edit_changes_only_active_entry() {
    let mut store = new_store();
    select(&mut store, "dashboard");

    let before = match &store.state().code {
        ExampleCode::Files(files) => files.clone(),
        ExampleCode::Single(_) => unreachable!(),
    };

    let result = store.dispatch(Action::EditActiveDocument {
        text: "export default () => <main>edited</main>;".to_string(),
    });
    assert!(result.state_changed);

    let ExampleCode::Files(files) = &store.state().code else {
        unreachable!();
    };
    assert_eq!(files[1].content, "export default () => <main>edited</main>;");
    assert_eq!(files[0], before[0]);
    assert_eq!(files[2], before[2]);
    assert!(files[1].is_entry);
    assert_eq!(files[1].name, before[1].name);
}

#[test]
fn edit_survives_switching_files_and_back() {
    let mut store = new_store();
    select(&mut store, "dashboard");

    store.dispatch(Action::EditActiveDocument {
        text: "// edited".to_string(),
    });
    store.dispatch(Action::SetActiveFile { index: 0 });
    store.dispatch(Action::SetActiveFile { index: 1 });

    let (name, content) = store.state().active_document();
    assert_eq!(name, "App.tsx");
    assert_eq!(content, "// edited");
}

#[test]
fn reset_restores_original_after_any_number_of_edits() {
    let mut store = new_store();
    select(&mut store, "dashboard");
    let original = store.catalog().lookup("dashboard").unwrap().code.clone();

    for i in 0..5 {
        store.dispatch(Action::EditActiveDocument {
            text: format!("// edit {}", i),
        });
    }
    store.dispatch(Action::SetActiveFile { index: 2 });
    store.dispatch(Action::EditActiveDocument {
        text: "// another".to_string(),
    });

    let result = store.dispatch(Action::ResetCurrent);
    assert!(result.state_changed);
    assert_eq!(store.state().selected_id, "dashboard");
    assert_eq!(store.state().code, original);
    assert_eq!(store.state().active_file, 1);
}

#[test]
fn set_active_file_out_of_range_is_rejected() {
    let mut store = new_store();
    select(&mut store, "dashboard");

    let result = store.dispatch(Action::SetActiveFile { index: 3 });
    assert!(!result.state_changed);
    assert_eq!(
        result.rejected,
        Some(PlaygroundError::InvalidFileIndex { index: 3, len: 3 })
    );
    assert_eq!(store.state().active_file, 1);
}

#[test]
fn single_text_has_exactly_one_document() {
    let mut store = new_store();

    let result = store.dispatch(Action::SetActiveFile { index: 0 });
    assert!(result.rejected.is_none());
    assert!(!result.state_changed);

    let result = store.dispatch(Action::SetActiveFile { index: 1 });
    assert_eq!(
        result.rejected,
        Some(PlaygroundError::InvalidFileIndex { index: 1, len: 1 })
    );
}

#[test]
fn remount_key_tracks_example_refresh_and_sandbox() {
    let mut store = new_store();
    let base = store.remount_key();
    assert_eq!(base, store.remount_key());

    select(&mut store, "dashboard");
    let after_select = store.remount_key();
    assert_ne!(after_select, base);

    store.dispatch(Action::RefreshPreview);
    let after_refresh = store.remount_key();
    assert_ne!(after_refresh, after_select);

    store.dispatch(Action::ToggleSandbox);
    assert_ne!(store.remount_key(), after_refresh);
}

#[test]
fn toggling_sandbox_twice_still_changes_the_key() {
    let mut store = new_store();
    let sandbox_before = store.state().sandbox_enabled;
    let key0 = store.remount_key();

    store.dispatch(Action::ToggleSandbox);
    let key1 = store.remount_key();

    store.dispatch(Action::ToggleSandbox);
    let key2 = store.remount_key();

    assert_eq!(store.state().sandbox_enabled, sandbox_before);
    assert_ne!(key1, key0);
    assert_ne!(key2, key1);
    assert_ne!(key2, key0);
}

#[test]
fn editing_does_not_touch_the_remount_key() {
    let mut store = new_store();
    let key = store.remount_key();
    store.dispatch(Action::EditActiveDocument {
        text: "// edited".to_string(),
    });
    assert_eq!(store.remount_key(), key);
}

#[test]
fn copy_active_file_copies_edited_content() {
    let mut store = new_store();
    store.dispatch(Action::EditActiveDocument {
        text: "// edited".to_string(),
    });

    let now = Instant::now();
    let result = store.dispatch(Action::CopyActiveFile { now });
    assert_eq!(
        result.effects,
        vec![Effect::SetClipboardText("// edited".to_string())]
    );

    let feedback = store.state().ui.copy_feedback.unwrap();
    assert_eq!(feedback.target, CopyTarget::ActiveFile);

    let mut clipboard = CapturingClipboard { written: Vec::new() };
    assert!(run_effects(result.effects, &mut clipboard).is_none());
    assert_eq!(clipboard.written, ["// edited"]);
}

#[test]
fn copy_snippet_reflects_canonical_code_not_edits() {
    let mut store = new_store();
    store.dispatch(Action::EditActiveDocument {
        text: "// edited".to_string(),
    });

    let result = store.dispatch(Action::CopySnippet {
        now: Instant::now(),
    });
    let [Effect::SetClipboardText(text)] = result.effects.as_slice() else {
        panic!("expected a clipboard effect");
    };
    assert!(text.contains("export default function Todo()"));
    assert!(!text.contains("// edited"));
    assert_eq!(*text, store.integration_snippet());
}

#[test]
fn copy_feedback_expires_after_the_timeout() {
    let mut store = new_store();
    let t0 = Instant::now();
    store.dispatch(Action::CopyActiveFile { now: t0 });

    let result = store.dispatch(Action::Tick {
        now: t0 + Duration::from_millis(500),
    });
    assert!(!result.state_changed);
    assert!(store.state().ui.copy_feedback.is_some());

    let result = store.dispatch(Action::Tick { now: t0 + COPY_FEEDBACK });
    assert!(result.state_changed);
    assert!(store.state().ui.copy_feedback.is_none());
}

#[test]
fn clipboard_failure_clears_feedback_without_blocking() {
    let mut store = new_store();
    let result = store.dispatch(Action::CopyActiveFile {
        now: Instant::now(),
    });

    let mut clipboard = BrokenClipboard;
    let followup = run_effects(result.effects, &mut clipboard).unwrap();

    let result = store.dispatch(followup);
    assert!(matches!(
        result.rejected,
        Some(PlaygroundError::ClipboardUnavailable(_))
    ));
    assert!(store.state().ui.copy_feedback.is_none());

    // Other transitions keep working.
    assert!(store.dispatch(Action::RefreshPreview).state_changed);
}

#[test]
fn snippet_panel_toggles_idempotently() {
    let mut store = new_store();

    assert!(store.dispatch(Action::ShowSnippet).state_changed);
    assert!(!store.dispatch(Action::ShowSnippet).state_changed);
    assert!(store.state().ui.snippet_visible);

    assert!(store.dispatch(Action::CloseSnippet).state_changed);
    assert!(!store.dispatch(Action::CloseSnippet).state_changed);
    assert!(!store.state().ui.snippet_visible);
}

#[test]
fn refresh_counter_strictly_increases() {
    let mut store = new_store();
    let mut last = store.state().refresh_counter;

    for action in [
        Action::RefreshPreview,
        Action::ToggleSandbox,
        Action::RefreshPreview,
        Action::ToggleSandbox,
    ] {
        store.dispatch(action);
        assert!(store.state().refresh_counter > last);
        last = store.state().refresh_counter;
    }
}
