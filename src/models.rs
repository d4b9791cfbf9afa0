//! Records produced while checking a configuration document against the asset mapping.

use serde::Serialize;

/// A string that looks like an asset path but has no entry in the asset mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedAssetReference {
  /// JSON pointer to the string inside the configuration document.
  pub pointer: String,
  /// The string as authored.
  pub value: String,
}

/// Summary of how a document fares against the asset mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
  /// Number of string leaves in the document.
  pub string_leaves: usize,
  /// Number of string leaves that resolve to an asset reference.
  pub substituted: usize,
  /// Asset-like strings left unresolved, in document order.
  pub unresolved: Vec<UnresolvedAssetReference>,
}
