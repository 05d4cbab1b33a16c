//! Record-to-document transform.
//!
//! Flattens an arbitrarily nested record into dot-joined keys, drops rich
//! content sub-structure and null values, and strips markup from the
//! designated text-bearing fields. Pure function of its input; no I/O.

use serde_json::{Map, Value};

use search_sync_shared::IndexDocument;

/// Final path segments kept when a key's path crosses rich content
/// (`blocks`/`content`) sub-structure.
const RETAINED_RICH_CONTENT_SEGMENTS: [&str; 6] =
    ["title", "content", "text", "caption", "description", "summary"];

/// Final path segments whose string values get markup stripped.
const MARKUP_SEGMENTS: [&str; 6] = ["content", "description", "text", "summary", "caption", "body"];

/// Convert a nested record into a flat, index-safe document.
///
/// Guarantees on the output: no nested containers, no null values, and no
/// markup in the text-bearing fields. The record's primary key field passes
/// through flattening unmodified.
pub fn transform(record: &Value) -> IndexDocument {
    let mut flattened = Map::new();
    flatten_into(record, String::new(), &mut flattened);

    let mut document = IndexDocument::new();
    for (key, value) in flattened {
        let segment = final_segment(&key);

        // Drop rich-content sub-structure except for named leaf fields that
        // are intentionally searchable text.
        if (key.contains("blocks") || key.contains("content"))
            && !RETAINED_RICH_CONTENT_SEGMENTS.contains(&segment)
        {
            continue;
        }

        if value.is_null() {
            continue;
        }

        let value = if MARKUP_SEGMENTS.contains(&segment) {
            match value {
                Value::String(text) => Value::String(strip_markup(&text)),
                other => other,
            }
        } else {
            value
        };

        document.insert(key, value);
    }

    document
}

/// Recursively flatten maps and sequences into dot-joined keys.
fn flatten_into(value: &Value, prefix: String, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(nested, join_path(&prefix, key), out);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_into(nested, join_path(&prefix, &index.to_string()), out);
            }
        }
        scalar => {
            if !prefix.is_empty() {
                out.insert(prefix, scalar.clone());
            }
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn final_segment(key: &str) -> &str {
    key.rsplit('.').next().unwrap_or(key)
}

/// Plain-text rendering of a markup-bearing value.
///
/// Tags are removed, text content is preserved, and whitespace is collapsed
/// to single spaces.
fn strip_markup(input: &str) -> String {
    let fragment = scraper::Html::parse_fragment(input);
    let text = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flattens_nested_structure() {
        let document = transform(&json!({
            "id": 1,
            "author": {"name": "Ada", "address": {"city": "London"}},
            "tags": ["a", "b"]
        }));

        assert_eq!(document.get("id"), Some(&json!(1)));
        assert_eq!(document.get("author.name"), Some(&json!("Ada")));
        assert_eq!(document.get("author.address.city"), Some(&json!("London")));
        assert_eq!(document.get("tags.0"), Some(&json!("a")));
        assert_eq!(document.get("tags.1"), Some(&json!("b")));
    }

    #[test]
    fn test_primary_key_survives_unmodified() {
        let document = transform(&json!({"id": "a1b2-c3d4", "title": "Hi"}));
        assert_eq!(document.get("id"), Some(&json!("a1b2-c3d4")));
    }

    #[test]
    fn test_drops_rich_content_substructure() {
        let document = transform(&json!({
            "id": 1,
            "blocks": {
                "items": [{
                    "title": "Kept",
                    "content": "<p>Kept too</p>",
                    "layout": "two-column",
                    "sort": 3
                }]
            }
        }));

        assert_eq!(document.get("blocks.items.0.title"), Some(&json!("Kept")));
        assert_eq!(
            document.get("blocks.items.0.content"),
            Some(&json!("Kept too"))
        );
        assert_eq!(document.get("blocks.items.0.layout"), None);
        assert_eq!(document.get("blocks.items.0.sort"), None);
    }

    #[test]
    fn test_content_substring_matches_anywhere_in_path() {
        let document = transform(&json!({
            "content_meta": {"version": 2, "summary": "short"}
        }));

        assert_eq!(document.get("content_meta.version"), None);
        assert_eq!(document.get("content_meta.summary"), Some(&json!("short")));
    }

    #[test]
    fn test_drops_null_values() {
        let document = transform(&json!({"id": 1, "subtitle": null}));

        assert_eq!(document.get("id"), Some(&json!(1)));
        assert_eq!(document.get("subtitle"), None);
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_strips_markup_from_description() {
        let document = transform(&json!({"meta": {"description": "<b>bold</b> text"}}));
        assert_eq!(document.get("meta.description"), Some(&json!("bold text")));
    }

    #[test]
    fn test_strips_markup_from_body() {
        let document = transform(&json!({"id": 1, "body": "<p>Hello</p>"}));
        assert_eq!(document.get("body"), Some(&json!("Hello")));
    }

    #[test]
    fn test_normalizes_whitespace_across_elements() {
        let document = transform(&json!({"text": "<p>first</p>\n<p>  second </p>"}));
        assert_eq!(document.get("text"), Some(&json!("first second")));
    }

    #[test]
    fn test_title_keeps_markup_untouched() {
        let document = transform(&json!({"title": "a <b>b</b>"}));
        assert_eq!(document.get("title"), Some(&json!("a <b>b</b>")));
    }

    #[test]
    fn test_non_string_markup_field_passes_through() {
        let document = transform(&json!({"summary": 5}));
        assert_eq!(document.get("summary"), Some(&json!(5)));
    }

    #[test]
    fn test_idempotent_on_flat_clean_input() {
        let flat = json!({
            "id": 1,
            "title": "Hi",
            "description": "plain words",
            "author.name": "Ada"
        });

        let once = transform(&flat);
        let twice = transform(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }
}
