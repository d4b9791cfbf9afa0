//! The site's configuration document and its one-time resolution.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::asset_paths::AssetLookup;
use crate::catalog::build_mapping;
use crate::diagnostics::report;
use crate::project::SiteLayout;
use crate::resolver::resolve_asset_paths;

/// The authored configuration document, compiled into the binary.
pub const SITE_CONFIG_JSON: &str = include_str!("../site/config.json");

/// Configuration document with every known asset path replaced by its resolved reference.
///
/// Created once at startup by [`initialize`] and read-only afterwards; hand it (or a borrow of
/// it) to whatever renders the site.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSiteConfig {
  value: Value,
}

impl ResolvedSiteConfig {
  /// The resolved document.
  pub fn value(&self) -> &Value {
    &self.value
  }

  /// Take ownership of the resolved document.
  pub fn into_value(self) -> Value {
    self.value
  }

  /// Look up a value by JSON pointer, e.g. `/playlist/songs/0/src`.
  pub fn pointer(&self, pointer: &str) -> Option<&Value> {
    self.value.pointer(pointer)
  }

  /// Look up a string by JSON pointer.
  pub fn str_at(&self, pointer: &str) -> Option<&str> {
    self.pointer(pointer).and_then(Value::as_str)
  }
}

/// Resolve the embedded site configuration against the known asset catalog.
pub fn initialize(layout: &SiteLayout) -> Result<ResolvedSiteConfig> {
  let mapping = build_mapping(layout).context("failed to build asset mapping")?;
  initialize_with(SITE_CONFIG_JSON, &mapping)
}

/// Parse `json` and resolve it against any asset lookup.
pub fn initialize_with<M>(json: &str, mapping: &M) -> Result<ResolvedSiteConfig>
where
  M: AssetLookup + ?Sized,
{
  let document: Value =
    serde_json::from_str(json).context("failed to parse site configuration JSON")?;

  let summary = report(&document, mapping);
  for unresolved in &summary.unresolved {
    tracing::warn!(
      pointer = %unresolved.pointer,
      value = %unresolved.value,
      "Asset-like string has no mapping entry"
    );
  }
  tracing::debug!(
    strings = summary.string_leaves,
    substituted = summary.substituted,
    "Resolved site configuration"
  );

  Ok(ResolvedSiteConfig {
    value: resolve_asset_paths(&document, mapping),
  })
}
