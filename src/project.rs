//! Layout shared by the catalog and URL helpers.

/// Prefixes connecting authored logical asset paths to the URLs they are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
  /// Prefix every authored asset path starts with, e.g. `/src/assets`.
  pub source_asset_prefix: String,
  /// Public base the bundled assets are served under, e.g. `/assets`.
  pub public_asset_base: String,
}
