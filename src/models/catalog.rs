//! Read-only example registry.
//!
//! Injected into the store rather than held as a global so multiple
//! playground instances never interfere.

use compact_str::CompactString;
use rustc_hash::{FxHashMap, FxHashSet};

use super::descriptor::{ExampleCode, ExampleDescriptor};

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId(CompactString),
    EmptyFileSet(CompactString),
    DuplicateFileName {
        example: CompactString,
        name: CompactString,
    },
    UnknownDefault(CompactString),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no examples"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate example id: {}", id),
            CatalogError::EmptyFileSet(id) => {
                write!(f, "example {} has an empty file set", id)
            }
            CatalogError::DuplicateFileName { example, name } => {
                write!(f, "example {} repeats file name: {}", example, name)
            }
            CatalogError::UnknownDefault(id) => {
                write!(f, "default example not in catalog: {}", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

pub struct Catalog {
    entries: Vec<ExampleDescriptor>,
    index: FxHashMap<CompactString, usize>,
    default_index: usize,
}

impl Catalog {
    /// Builds the registry. Rejects an empty catalog, duplicate example
    /// ids, multi-file examples with zero files, and repeated file names
    /// within one example. The default example starts as the first entry.
    pub fn new(entries: Vec<ExampleDescriptor>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }

            if let ExampleCode::Files(files) = &entry.code {
                if files.is_empty() {
                    return Err(CatalogError::EmptyFileSet(entry.id.clone()));
                }
                let mut names = FxHashSet::default();
                for file in files {
                    if !names.insert(file.name.clone()) {
                        return Err(CatalogError::DuplicateFileName {
                            example: entry.id.clone(),
                            name: file.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            entries,
            index,
            default_index: 0,
        })
    }

    /// Configures the fallback example used when no id (or an unknown id)
    /// is requested.
    pub fn with_default(mut self, id: &str) -> Result<Self> {
        match self.index.get(id) {
            Some(&i) => {
                self.default_index = i;
                Ok(self)
            }
            None => Err(CatalogError::UnknownDefault(CompactString::new(id))),
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&ExampleDescriptor> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn default_example(&self) -> &ExampleDescriptor {
        &self.entries[self.default_index]
    }

    pub fn entries(&self) -> &[ExampleDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups entries for display: first-seen category order, insertion
    /// order within a category.
    pub fn list_by_category(&self) -> Vec<(&str, Vec<&ExampleDescriptor>)> {
        let mut groups: Vec<(&str, Vec<&ExampleDescriptor>)> = Vec::new();
        for entry in &self.entries {
            let category = entry.category.as_str();
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, members)) => members.push(entry),
                None => groups.push((category, vec![entry])),
            }
        }
        groups
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/catalog.rs"]
mod tests;
