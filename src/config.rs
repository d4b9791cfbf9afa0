//! Resolver configuration loader describing where assets live and where they are served.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::SiteLayout;

const DEFAULT_CONFIG_FILE: &str = "keepsake.config.json";

/// Discoverable configuration describing the asset source prefix and public base.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
  /// Prefix authored asset paths share in the site configuration.
  pub source_asset_prefix: String,
  /// Public URL base the bundled assets are served under.
  pub public_asset_base: String,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      source_asset_prefix: "/src/assets".into(),
      public_asset_base: "/assets".into(),
    }
  }
}

impl ResolverConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fallback to default
  /// values so the site still resolves against the conventional layout.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Convert the configuration into an owned layout description.
  pub fn into_layout(self) -> SiteLayout {
    SiteLayout {
      source_asset_prefix: self.source_asset_prefix,
      public_asset_base: self.public_asset_base,
    }
  }

  /// Borrowing conversion into a layout, cloning the underlying strings.
  pub fn to_layout(&self) -> SiteLayout {
    self.clone().into_layout()
  }
}
