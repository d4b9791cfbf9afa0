use std::sync::OnceLock;

use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
            ]
        })
        .as_slice()
}

fn media_extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[^\s]*\.(gif|png|jpe?g|webp|svg|mp3|wav|ogg|mp4)$")
            .expect("invalid media extension regex")
    })
}

/// Determine whether a string is an external reference that never maps to a bundled asset.
pub fn is_external_reference(value: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

/// Determine whether a configuration string looks like an authored asset path.
///
/// Only used for diagnostics; resolution itself matches exact mapping keys.
pub fn looks_like_asset_path(value: &str) -> bool {
    !is_external_reference(value) && media_extension_pattern().is_match(value)
}
