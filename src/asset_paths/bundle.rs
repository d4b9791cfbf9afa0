use crate::project::SiteLayout;

/// Produce the public URL a logical asset path is served from.
///
/// The source prefix is stripped and the remainder joined onto the public base. The generated
/// URL always uses forward slashes, regardless of the separator the path was authored with.
pub fn make_public_asset_url(layout: &SiteLayout, logical_path: &str) -> String {
    let normalised = logical_path.replace('\\', "/");
    let prefix = layout.source_asset_prefix.trim_end_matches('/');
    let relative = if prefix.is_empty() {
        normalised.as_str()
    } else {
        normalised
            .strip_prefix(prefix)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(normalised.as_str())
    };

    format!(
        "{}/{}",
        layout.public_asset_base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
