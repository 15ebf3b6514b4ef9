//! Integration snippet generation.
//!
//! Pure function of (descriptor, sandbox flag). It always reflects the
//! example's canonical code, never in-progress edits, and identical inputs
//! produce byte-identical output so copied snippets and snapshots are
//! stable.

use std::fmt::Write;

use crate::models::{ExampleCode, ExampleDescriptor};

use super::preview;

/// Renders a copy-pastable usage example: the renderer import, one
/// namespace import per configured dependency, the embedded code, and the
/// merged config with the current sandbox value.
pub fn integration_snippet(descriptor: &ExampleDescriptor, sandbox: bool) -> String {
    let mut out = String::new();

    out.push_str("import React from 'react';\n");
    out.push_str("import { CodeExecutor } from 'react-exe';\n");
    for name in descriptor.config.dependencies.keys() {
        let _ = writeln!(out, "import * as {} from '{}';", binding_ident(name), name);
    }

    out.push_str("\nfunction Example() {\n");

    let code_binding = match &descriptor.code {
        ExampleCode::Single(code) => {
            let _ = writeln!(out, "  const code = `{}`;", code);
            "code"
        }
        ExampleCode::Files(_) => {
            let files = serde_json::to_string_pretty(&descriptor.code).unwrap_or_default();
            let _ = writeln!(out, "  const files = {};", files);
            "files"
        }
    };

    let config = preview::preview_config(&descriptor.config, sandbox);
    let config = serde_json::to_string_pretty(&config).unwrap_or_default();

    out.push_str("\n  return (\n    <CodeExecutor\n");
    let _ = writeln!(out, "      code={{{}}}", code_binding);
    let _ = writeln!(out, "      config={{{}}}", config);
    out.push_str("    />\n  );\n}\n\nexport default Example;\n");

    out
}

/// JS identifier for a package name: '@scope/pkg' -> '_scope_pkg'.
fn binding_ident(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/snippet.rs"]
mod tests;
