use super::*;
use crate::kernel::state::UiState;
use crate::models::ExampleCode;
use compact_str::CompactString;
use serde_json::json;
use std::collections::BTreeMap;

fn state(id: &str, counter: u64, sandbox: bool) -> PlaygroundState {
    PlaygroundState {
        selected_id: CompactString::new(id),
        code: ExampleCode::Single(String::new()),
        active_file: 0,
        sandbox_enabled: sandbox,
        refresh_counter: counter,
        ui: UiState::default(),
    }
}

#[test]
fn key_is_delimited_concatenation() {
    assert_eq!(remount_key(&state("todo", 0, true)), "todo-0-sandbox");
    assert_eq!(remount_key(&state("todo", 3, false)), "todo-3-direct");
}

#[test]
fn key_differs_when_any_input_differs() {
    let base = remount_key(&state("todo", 0, true));
    assert_ne!(base, remount_key(&state("dashboard", 0, true)));
    assert_ne!(base, remount_key(&state("todo", 1, true)));
    assert_ne!(base, remount_key(&state("todo", 0, false)));
}

#[test]
fn key_is_stable_for_equal_inputs() {
    assert_eq!(
        remount_key(&state("todo", 7, false)),
        remount_key(&state("todo", 7, false))
    );
}

#[test]
fn preview_config_merges_sandbox_flag() {
    let config = ExampleConfig {
        enable_tailwind: true,
        ..ExampleConfig::default()
    };

    let merged = preview_config(&config, true);
    assert_eq!(merged["sandbox"], json!(true));
    assert_eq!(merged["enableTailwind"], json!(true));

    let merged = preview_config(&config, false);
    assert_eq!(merged["sandbox"], json!(false));
}

#[test]
fn preview_config_passes_dependencies_and_extra_through() {
    let mut dependencies = BTreeMap::new();
    dependencies.insert(CompactString::new("echarts"), json!("echarts"));
    let mut extra = BTreeMap::new();
    extra.insert("autoResolvePackage".to_string(), json!(false));

    let config = ExampleConfig {
        dependencies,
        enable_tailwind: false,
        extra,
    };

    let merged = preview_config(&config, true);
    assert_eq!(merged["dependencies"]["echarts"], json!("echarts"));
    assert_eq!(merged["autoResolvePackage"], json!(false));
    assert!(merged.get("enableTailwind").is_none());
}
