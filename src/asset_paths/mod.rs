//! Helpers for mapping authored asset paths to the references the site is served with.
//!
//! The mapping table, the public URL builder and the asset-path heuristics live in separate
//! submodules so each can be tested on its own. Only the mapping takes part in resolution;
//! the filters feed diagnostics.

mod bundle;
mod filters;
mod mapping;

pub use bundle::make_public_asset_url;
pub use filters::{is_external_reference, looks_like_asset_path};
pub use mapping::{AssetLookup, AssetPathMapping, MappingError};
