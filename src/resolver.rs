//! Deep substitution of logical asset paths inside a configuration document.

use serde_json::{Map, Value};

use crate::asset_paths::AssetLookup;

/// Return a copy of `value` where every string equal to a mapped logical path is replaced by
/// its resolved reference.
///
/// Arrays keep their length and order, objects keep their keys and key order, and keys are
/// never rewritten. Strings without a mapping entry, numbers, booleans and nulls are copied
/// unchanged. A substituted reference is not looked up again.
pub fn resolve_asset_paths<M>(value: &Value, mapping: &M) -> Value
where
  M: AssetLookup + ?Sized,
{
  match value {
    Value::String(text) => mapping
      .lookup(text)
      .cloned()
      .unwrap_or_else(|| value.clone()),
    Value::Array(items) => Value::Array(
      items
        .iter()
        .map(|item| resolve_asset_paths(item, mapping))
        .collect(),
    ),
    Value::Object(fields) => Value::Object(
      fields
        .iter()
        .map(|(key, field)| (key.clone(), resolve_asset_paths(field, mapping)))
        .collect::<Map<String, Value>>(),
    ),
    Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::asset_paths::AssetPathMapping;
  use serde_json::json;

  fn mapping() -> AssetPathMapping {
    AssetPathMapping::from_pairs([("/a.png", "RESOLVED_A")]).unwrap()
  }

  #[test]
  fn substitutes_exact_keys() {
    assert_eq!(resolve_asset_paths(&json!("/a.png"), &mapping()), json!("RESOLVED_A"));
  }

  #[test]
  fn passes_through_unknown_strings() {
    for text in ["Hi", "/missing.png", "/a.png/", "prefix /a.png", ""] {
      assert_eq!(resolve_asset_paths(&json!(text), &mapping()), json!(text));
    }
  }

  #[test]
  fn passes_through_atomic_values() {
    let mapping = mapping();
    assert_eq!(resolve_asset_paths(&json!(42), &mapping), json!(42));
    assert_eq!(resolve_asset_paths(&json!(2.5), &mapping), json!(2.5));
    assert_eq!(resolve_asset_paths(&json!(true), &mapping), json!(true));
    assert_eq!(resolve_asset_paths(&Value::Null, &mapping), Value::Null);
  }

  #[test]
  fn resolves_sequences_elementwise_in_order() {
    let input = json!(["/a.png", 7, "/missing.png"]);
    let output = resolve_asset_paths(&input, &mapping());

    assert_eq!(output, json!(["RESOLVED_A", 7, "/missing.png"]));
  }

  #[test]
  fn keeps_object_keys_untouched() {
    let input = json!({"/a.png": "/a.png", "k2": false});
    let output = resolve_asset_paths(&input, &mapping());

    assert_eq!(output, json!({"/a.png": "RESOLVED_A", "k2": false}));
  }

  #[test]
  fn resolves_mixed_document() {
    let input = json!({
      "title": "Hi",
      "icon": "/a.png",
      "list": ["/a.png", "/missing.png"]
    });
    let expected = json!({
      "title": "Hi",
      "icon": "RESOLVED_A",
      "list": ["RESOLVED_A", "/missing.png"]
    });

    assert_eq!(resolve_asset_paths(&input, &mapping()), expected);
  }

  #[test]
  fn resolves_every_depth() {
    let input = json!({
      "pages": [
        {"gif": "/a.png", "steps": [{"image": "/a.png"}, [["/a.png"]]]},
        {"gif": null}
      ]
    });
    let output = resolve_asset_paths(&input, &mapping());

    assert_eq!(output.pointer("/pages/0/gif"), Some(&json!("RESOLVED_A")));
    assert_eq!(output.pointer("/pages/0/steps/0/image"), Some(&json!("RESOLVED_A")));
    assert_eq!(output.pointer("/pages/0/steps/1/0/0"), Some(&json!("RESOLVED_A")));
    assert_eq!(output.pointer("/pages/1/gif"), Some(&Value::Null));
  }

  #[test]
  fn preserves_key_insertion_order() {
    let input: Value = serde_json::from_str(r#"{"zeta": "/a.png", "alpha": 1, "mid": "x"}"#).unwrap();
    let output = resolve_asset_paths(&input, &mapping());
    let keys: Vec<&str> = output
      .as_object()
      .unwrap()
      .keys()
      .map(String::as_str)
      .collect();

    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
  }

  #[test]
  fn does_not_resolve_transitively() {
    let mapping = AssetPathMapping::from_pairs([("/a.png", "/b.png"), ("/b.png", "FINAL_B")]).unwrap();

    assert_eq!(resolve_asset_paths(&json!("/a.png"), &mapping), json!("/b.png"));
  }

  #[test]
  fn substitutes_structured_references() {
    let mapping =
      AssetPathMapping::from_pairs([("/song.mp3", json!({"url": "/assets/song-1f2e.mp3"}))]).unwrap();
    let output = resolve_asset_paths(&json!({"songs": ["/song.mp3"]}), &mapping);

    assert_eq!(output, json!({"songs": [{"url": "/assets/song-1f2e.mp3"}]}));
  }

  #[test]
  fn leaves_input_unchanged() {
    let input = json!({"icon": "/a.png"});
    let snapshot = input.clone();
    let _ = resolve_asset_paths(&input, &mapping());

    assert_eq!(input, snapshot);
  }
}
