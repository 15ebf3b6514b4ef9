//! Port contracts for the host shell.

use serde_json::Value;

use crate::models::ExampleCode;

/// A virtual declaration file made available to the edited code's language
/// service. Opaque passthrough; the kernel never interprets the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientLib {
    pub path: String,
    pub content: String,
}

/// Mount-time editor configuration: language mode plus ambient declaration
/// files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSetup {
    pub language: String,
    pub ambient_libs: Vec<AmbientLib>,
}

impl Default for EditorSetup {
    fn default() -> Self {
        Self {
            language: "typescript".to_string(),
            ambient_libs: vec![react_ambient_lib()],
        }
    }
}

/// Minimal React typings for the editor's language service, covering what
/// the playground examples reference.
pub fn react_ambient_lib() -> AmbientLib {
    AmbientLib {
        path: "file:///node_modules/@types/react/index.d.ts".to_string(),
        content: REACT_DECLS.to_string(),
    }
}

const REACT_DECLS: &str = r#"declare module 'react' {
  export = React;
  export as namespace React;
  namespace React {
    class Component<P = {}, S = {}> {
      constructor(props: P);
      render(): React.ReactNode;
      setState(state: Partial<S>): void;
      state: S;
      props: P;
    }
    interface FunctionComponent<P = {}> {
      (props: P): React.ReactElement | null;
    }
    type FC<P = {}> = FunctionComponent<P>;
    interface ReactElement {}
    interface ReactNode {}
    function useState<T>(initial: T): [T, (next: T) => void];
    function useEffect(effect: () => void | (() => void), deps?: unknown[]): void;
    function useRef<T>(initial: T | null): { current: T | null };
  }
}
declare var React: typeof React;
"#;

/// Text-editing widget. Displays the active document and reports each
/// change back as the full updated text
/// (`Action::EditActiveDocument`).
pub trait EditorHost {
    /// Called once on mount with the opaque language setup.
    fn configure(&mut self, setup: &EditorSetup);

    fn show_document(&mut self, name: &str, text: &str);
}

/// Code-rendering engine. Black box; it may sandbox execution internally.
pub trait PreviewHost {
    /// Tear down the renderer instance and recreate it. Called whenever
    /// the remount key changes.
    fn remount(&mut self, key: &str);

    fn render(&mut self, code: &ExampleCode, config: &Value);
}

#[derive(Debug)]
pub enum ClipboardError {
    NotAvailable,
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "clipboard not available"),
            ClipboardError::WriteFailed(e) => write!(f, "clipboard write failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardPort {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/ports.rs"]
mod tests;
