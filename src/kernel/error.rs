use compact_str::CompactString;

/// Recoverable failures. Every one degrades to "no-op plus feedback";
/// none terminates the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundError {
    UnknownExample(CompactString),
    InvalidFileIndex { index: usize, len: usize },
    ClipboardUnavailable(String),
}

impl std::fmt::Display for PlaygroundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaygroundError::UnknownExample(id) => {
                write!(f, "unknown example id: {}", id)
            }
            PlaygroundError::InvalidFileIndex { index, len } => {
                write!(f, "file index {} out of range (len {})", index, len)
            }
            PlaygroundError::ClipboardUnavailable(reason) => {
                write!(f, "clipboard unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for PlaygroundError {}
