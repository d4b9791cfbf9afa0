#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod models;
pub mod project;
pub mod resolver;
pub mod site;

pub use asset_paths::{AssetLookup, AssetPathMapping, MappingError};
pub use config::ResolverConfig;
pub use project::SiteLayout;
pub use resolver::resolve_asset_paths;
pub use site::{ResolvedSiteConfig, initialize, initialize_with};
