//! Hand-maintained enumeration of the assets the site ships with.

use serde::Serialize;
use serde_json::Value;

use crate::asset_paths::{AssetPathMapping, MappingError, make_public_asset_url};
use crate::project::SiteLayout;

/// Logical paths of every asset bundled with the site, as authors write them in `config.json`.
pub const KNOWN_ASSETS: &[&str] = &[
  "/src/assets/cute-bear.gif",
  "/src/assets/music-bear.gif",
  "/src/assets/comfort-bear.gif",
  "/src/assets/kiss-bears.gif",
  "/src/assets/photo-bear.gif",
  "/src/assets/love-you-bear.gif",
  "/src/assets/child.gif",
  "/src/assets/rose-bear.gif",
  "/src/assets/cook-bear.gif",
  "/src/assets/kiss-bear.gif",
  "/src/assets/left-button.png",
  "/src/assets/right-button.png",
  "/src/assets/gift/gift1.jpg",
  "/src/assets/gift/gift2.jpg",
  "/src/assets/gift/gift3.jpg",
  "/src/assets/couple_photo/mylove.png",
  "/src/assets/album-covers/amaran.jpeg",
  "/src/assets/album-covers/Dude.jpg",
  "/src/assets/album-covers/katradhu-tamizh.jpg",
  "/src/assets/album-covers/aasa_orave.jpg",
  "/src/assets/album-covers/mundasupatti.jpg",
  "/src/assets/songs/Amaran.mp3",
  "/src/assets/songs/Oorum-Blood.mp3",
  "/src/assets/songs/unakagathanae.mp3",
  "/src/assets/songs/Aasa-Orave.mp3",
  "/src/assets/songs/kadhal-kanave.mp3",
];

/// Broad media category of a bundled asset, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
  /// Still image (`png`, `jpg`, `jpeg`, `webp`, `svg`).
  Image,
  /// Animated GIF.
  Animation,
  /// Audio track.
  Audio,
  /// Anything else.
  Other,
}

impl AssetKind {
  /// Classify a logical path by its file extension.
  pub fn from_path(path: &str) -> Self {
    let extension = path
      .rsplit_once('.')
      .map(|(_, ext)| ext.to_ascii_lowercase())
      .unwrap_or_default();

    match extension.as_str() {
      "gif" => Self::Animation,
      "png" | "jpg" | "jpeg" | "webp" | "svg" => Self::Image,
      "mp3" | "wav" | "ogg" => Self::Audio,
      _ => Self::Other,
    }
  }
}

/// Build the asset path mapping for every known asset under the given layout.
pub fn build_mapping(layout: &SiteLayout) -> Result<AssetPathMapping, MappingError> {
  AssetPathMapping::from_pairs(KNOWN_ASSETS.iter().map(|path| {
    (
      *path,
      Value::String(make_public_asset_url(layout, path)),
    )
  }))
}

/// Known assets of a single kind, in enumeration order.
pub fn assets_of_kind(kind: AssetKind) -> impl Iterator<Item = &'static str> {
  KNOWN_ASSETS
    .iter()
    .copied()
    .filter(move |path| AssetKind::from_path(path) == kind)
}
