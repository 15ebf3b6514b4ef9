//! Example descriptors: the immutable records the catalog is built from.

use std::collections::BTreeMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// One named document inside a multi-file example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: CompactString,
    pub content: String,
    #[serde(default, rename = "isEntry", skip_serializing_if = "is_false")]
    pub is_entry: bool,
}

impl FileEntry {
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            name: CompactString::new(name),
            content: content.to_string(),
            is_entry: false,
        }
    }

    pub fn entry(name: &str, content: &str) -> Self {
        Self {
            name: CompactString::new(name),
            content: content.to_string(),
            is_entry: true,
        }
    }
}

/// Source text of an example: a single document or an ordered file set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleCode {
    Single(String),
    Files(Vec<FileEntry>),
}

impl ExampleCode {
    pub fn is_files(&self) -> bool {
        matches!(self, ExampleCode::Files(_))
    }

    /// Number of editable documents. A single-text example counts as one.
    pub fn file_count(&self) -> usize {
        match self {
            ExampleCode::Single(_) => 1,
            ExampleCode::Files(files) => files.len(),
        }
    }

    /// Index of the entry file: first entry marked `is_entry`, else 0.
    pub fn entry_index(&self) -> usize {
        match self {
            ExampleCode::Single(_) => 0,
            ExampleCode::Files(files) => {
                files.iter().position(|f| f.is_entry).unwrap_or(0)
            }
        }
    }
}

/// Renderer configuration carried on a descriptor. Forwarded to the preview
/// renderer merged with the sandbox flag; never interpreted by the kernel.
/// `BTreeMap` keys keep serialization byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleConfig {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<CompactString, Value>,
    #[serde(default, rename = "enableTailwind", skip_serializing_if = "is_false")]
    pub enable_tailwind: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Immutable catalog record describing one example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleDescriptor {
    pub id: CompactString,
    pub title: String,
    pub description: String,
    pub category: CompactString,
    pub code: ExampleCode,
    #[serde(default)]
    pub config: ExampleConfig,
}
