use std::collections::btree_map::{self, Entry};
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Lookup seam used by the resolver to turn a logical asset path into its resolved reference.
pub trait AssetLookup {
    /// Returns the resolved reference for an exact logical path, if one is known.
    fn lookup(&self, logical_path: &str) -> Option<&Value>;
}

/// Fixed table from logical asset path to the reference the asset pipeline produced for it.
///
/// Logical paths are unique: inserting the same path twice is rejected instead of silently
/// replacing the earlier reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetPathMapping {
    entries: BTreeMap<String, Value>,
}

/// Errors raised while building an [`AssetPathMapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The same logical path was enumerated more than once.
    DuplicatePath {
        /// Logical path that appeared twice.
        path: String,
    },
}

impl AssetPathMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from an enumeration of `(logical path, reference)` pairs.
    pub fn from_pairs<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> Result<Self, MappingError>
    where
        P: Into<String>,
        R: Into<Value>,
    {
        let mut mapping = Self::new();
        for (path, reference) in pairs {
            mapping.insert(path, reference)?;
        }
        Ok(mapping)
    }

    /// Register a logical path, failing when it is already present.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        reference: impl Into<Value>,
    ) -> Result<(), MappingError> {
        match self.entries.entry(path.into()) {
            Entry::Occupied(entry) => Err(MappingError::DuplicatePath {
                path: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(reference.into());
                Ok(())
            }
        }
    }

    /// Reference registered for an exact logical path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Whether the exact logical path is known.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no assets are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries ordered by logical path.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl AssetLookup for AssetPathMapping {
    fn lookup(&self, logical_path: &str) -> Option<&Value> {
        self.get(logical_path)
    }
}

impl AssetLookup for BTreeMap<String, Value> {
    fn lookup(&self, logical_path: &str) -> Option<&Value> {
        self.get(logical_path)
    }
}

impl AssetLookup for HashMap<String, Value> {
    fn lookup(&self, logical_path: &str) -> Option<&Value> {
        self.get(logical_path)
    }
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePath { path } => {
                write!(f, "asset path '{}' is enumerated more than once", path)
            }
        }
    }
}

impl std::error::Error for MappingError {}
