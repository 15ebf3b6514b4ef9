//! Preview invalidation and renderer input.

use serde_json::{Map, Value};

use crate::models::ExampleConfig;

use super::state::PlaygroundState;

/// Identity token for the preview instance. A change in the selected
/// example, the refresh counter, or the sandbox flag always yields a
/// different key, which tells the renderer to discard its instance and
/// recreate it from scratch.
pub fn remount_key(state: &PlaygroundState) -> String {
    format!(
        "{}-{}-{}",
        state.selected_id,
        state.refresh_counter,
        if state.sandbox_enabled {
            "sandbox"
        } else {
            "direct"
        }
    )
}

/// Descriptor config merged with the live sandbox flag, as handed to the
/// preview renderer. The config itself is opaque passthrough.
pub fn preview_config(config: &ExampleConfig, sandbox: bool) -> Value {
    let mut map = match serde_json::to_value(config) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    map.insert("sandbox".to_string(), Value::Bool(sandbox));
    Value::Object(map)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/preview.rs"]
mod tests;
