//! Reporting for asset-like strings the mapping does not know about.
//!
//! Resolution passes unknown strings through silently, so a typo in an authored asset path only
//! shows up as a broken image at runtime. These helpers walk the unresolved document and point
//! at the offending strings instead.

use serde_json::Value;

use crate::asset_paths::{AssetLookup, looks_like_asset_path};
use crate::models::{ResolutionReport, UnresolvedAssetReference};

/// Collect asset-like strings in `document` that have no mapping entry, in document order.
pub fn find_unresolved_asset_references<M>(
  document: &Value,
  mapping: &M,
) -> Vec<UnresolvedAssetReference>
where
  M: AssetLookup + ?Sized,
{
  report(document, mapping).unresolved
}

/// Count string leaves and substitutions, and list unresolved asset-like strings.
pub fn report<M>(document: &Value, mapping: &M) -> ResolutionReport
where
  M: AssetLookup + ?Sized,
{
  let mut summary = ResolutionReport::default();
  let mut pointer = String::new();
  walk(document, mapping, &mut pointer, &mut summary);
  summary
}

/// Print unresolved references as build script warnings.
pub fn emit_cargo_warnings(unresolved: &[UnresolvedAssetReference]) {
  for reference in unresolved {
    println!("cargo:warning={}", format_warning(reference));
  }
}

fn format_warning(reference: &UnresolvedAssetReference) -> String {
  format!(
    "Unresolved asset reference '{}' at {}",
    reference.value,
    display_pointer(&reference.pointer)
  )
}

fn display_pointer(pointer: &str) -> &str {
  if pointer.is_empty() { "/" } else { pointer }
}

fn walk<M>(value: &Value, mapping: &M, pointer: &mut String, summary: &mut ResolutionReport)
where
  M: AssetLookup + ?Sized,
{
  match value {
    Value::String(text) => {
      summary.string_leaves += 1;
      if mapping.lookup(text).is_some() {
        summary.substituted += 1;
      } else if looks_like_asset_path(text) {
        summary.unresolved.push(UnresolvedAssetReference {
          pointer: pointer.clone(),
          value: text.clone(),
        });
      }
    }
    Value::Array(items) => {
      for (index, item) in items.iter().enumerate() {
        let restore = push_segment(pointer, &index.to_string());
        walk(item, mapping, pointer, summary);
        pointer.truncate(restore);
      }
    }
    Value::Object(fields) => {
      for (key, field) in fields {
        let restore = push_segment(pointer, key);
        walk(field, mapping, pointer, summary);
        pointer.truncate(restore);
      }
    }
    Value::Null | Value::Bool(_) | Value::Number(_) => {}
  }
}

// RFC 6901 escaping: `~` becomes `~0`, `/` becomes `~1`.
fn push_segment(pointer: &mut String, segment: &str) -> usize {
  let restore = pointer.len();
  pointer.push('/');
  pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
  restore
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::asset_paths::AssetPathMapping;
  use serde_json::json;

  fn mapping() -> AssetPathMapping {
    AssetPathMapping::from_pairs([("/src/assets/a.png", "/assets/a.png")]).unwrap()
  }

  #[test]
  fn finds_asset_like_strings_without_mapping() {
    let document = json!({
      "title": "Hi",
      "icon": "/src/assets/a.png",
      "list": ["/src/assets/a.png", "/src/assets/missing.png"]
    });

    let unresolved = find_unresolved_asset_references(&document, &mapping());
    assert_eq!(unresolved, vec![UnresolvedAssetReference {
      pointer: "/list/1".into(),
      value: "/src/assets/missing.png".into(),
    }]);
  }

  #[test]
  fn counts_strings_and_substitutions() {
    let document = json!({
      "title": "Hi",
      "icon": "/src/assets/a.png",
      "nested": {"again": ["/src/assets/a.png", 3, null]}
    });

    let summary = report(&document, &mapping());
    assert_eq!(summary.string_leaves, 3);
    assert_eq!(summary.substituted, 2);
    assert!(summary.unresolved.is_empty());
  }

  #[test]
  fn ignores_external_urls() {
    let document = json!({"cover": "https://example.com/cover.jpg"});
    assert!(find_unresolved_asset_references(&document, &mapping()).is_empty());
  }

  #[test]
  fn escapes_pointer_segments() {
    let document = json!({"a/b": {"c~d": "/src/assets/typo.gif"}});
    let unresolved = find_unresolved_asset_references(&document, &mapping());

    assert_eq!(unresolved[0].pointer, "/a~1b/c~0d");
    assert_eq!(document.pointer(&unresolved[0].pointer), Some(&json!("/src/assets/typo.gif")));
  }

  #[test]
  fn reports_root_string_with_empty_pointer() {
    let unresolved = find_unresolved_asset_references(&json!("/lost.png"), &mapping());

    assert_eq!(unresolved[0].pointer, "");
    assert_eq!(
      format_warning(&unresolved[0]),
      "Unresolved asset reference '/lost.png' at /"
    );
  }
}
