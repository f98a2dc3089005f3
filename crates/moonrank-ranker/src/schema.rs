//! Schema normalisation for raw metadata documents.
//!
//! Independently authored documents encode the same logical field in
//! different shapes (string vs. object, object vs. array, number vs. string).
//! `normalize_document` rewrites the known variants into the one shape the
//! typed `Metadata` decoder accepts. Fields it does not recognise pass
//! through untouched, and a document that needed no rewriting is returned
//! byte-for-byte.

use std::borrow::Cow;

use moonrank_common::{Metadata, MoonrankError, Result};
use serde::de::Error as _;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

const SELLER_FEE: &str = "seller_fee_basis_points";
const CREATORS_FIELD: &str = "properties.creators";

/// Coerce the known shape variants of one document.
///
/// `document` is a label (usually the file name) used in errors and logs.
pub fn normalize_document<'a>(document: &str, bytes: &'a [u8]) -> Result<Cow<'a, [u8]>> {
    let mut root: Value =
        serde_json::from_slice(bytes).map_err(|e| MoonrankError::parse(document, e))?;
    let Some(obj) = root.as_object_mut() else {
        return Err(MoonrankError::parse(
            document,
            serde_json::Error::custom("document root is not an object"),
        ));
    };

    // Every rule runs; `|` keeps them from short-circuiting.
    let modified = coerce_seller_fee(document, obj)
        | coerce_collection(document, obj)
        | coerce_files(document, obj)
        | coerce_creators(document, obj)?
        | coerce_attributes(document, obj);

    if !modified {
        return Ok(Cow::Borrowed(bytes));
    }
    Ok(Cow::Owned(serde_json::to_vec(&root)?))
}

/// Normalise then decode a document into typed metadata.
pub fn decode_document(document: &str, bytes: &[u8]) -> Result<Metadata> {
    let normalized = normalize_document(document, bytes)?;
    serde_json::from_slice(&normalized).map_err(|e| MoonrankError::parse(document, e))
}

/// Integer value of a numeric string; fractional values are truncated.
fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>().ok().or_else(|| {
        s.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

/// Like `parse_integer`, but a string that is not a number counts as 0.
fn integer_or_zero(document: &str, field: &str, s: &str) -> i64 {
    parse_integer(s).unwrap_or_else(|| {
        warn!("{document}: {field} {s:?} is not a number, using 0");
        0
    })
}

fn coerce_seller_fee(document: &str, obj: &mut Map<String, Value>) -> bool {
    let coerced = match obj.get(SELLER_FEE) {
        Some(Value::Number(n)) if !n.is_i64() && !n.is_u64() => {
            n.as_f64().map(|f| f.trunc() as i64)
        }
        Some(Value::String(s)) => Some(integer_or_zero(document, SELLER_FEE, s)),
        _ => None,
    };
    match coerced {
        Some(fee) => {
            debug!("{document}: {SELLER_FEE} coerced to {fee}");
            obj.insert(SELLER_FEE.to_string(), json!(fee));
            true
        }
        None => false,
    }
}

fn coerce_collection(document: &str, obj: &mut Map<String, Value>) -> bool {
    let mut modified = false;

    let first = match obj.get_mut("collection") {
        Some(Value::Array(items)) if items.is_empty() => Some(Value::Null),
        Some(Value::Array(items)) => Some(items.swap_remove(0)),
        _ => None,
    };
    if let Some(first) = first {
        debug!("{document}: collection as array, keeping first element");
        obj.insert("collection".to_string(), first);
        modified = true;
    }

    let name = match obj.get("collection") {
        Some(Value::String(name)) => name.clone(),
        _ => return modified,
    };
    debug!("{document}: collection as string: {name}");
    obj.insert("collection".to_string(), json!({ "name": name, "family": name }));
    true
}

fn coerce_files(document: &str, obj: &mut Map<String, Value>) -> bool {
    let Some(files) = obj
        .get_mut("properties")
        .and_then(Value::as_object_mut)
        .and_then(|p| p.get_mut("files"))
    else {
        return false;
    };

    match *files {
        Value::Object(_) => {
            debug!("{document}: properties.files as object");
            let inner = files.take();
            *files = Value::Array(vec![inner]);
            true
        }
        Value::Array(ref mut items) if items.first().is_some_and(Value::is_string) => {
            debug!("{document}: properties.files as array of uris");
            for item in items.iter_mut() {
                *item = match item.take() {
                    Value::String(uri) => json!({ "type": "image", "uri": uri }),
                    other => other,
                };
            }
            true
        }
        _ => false,
    }
}

fn coerce_creators(document: &str, obj: &mut Map<String, Value>) -> Result<bool> {
    let Some(Value::Array(creators)) = obj
        .get_mut("properties")
        .and_then(Value::as_object_mut)
        .and_then(|p| p.get_mut("creators"))
    else {
        return Ok(false);
    };

    let mut modified = false;
    for (i, creator) in creators.iter_mut().enumerate() {
        let Value::Object(creator) = creator else {
            warn!("{document}: creators array is malformed at element {i}");
            return Err(MoonrankError::Normalization {
                document: document.to_string(),
                field: CREATORS_FIELD,
                reason: format!("element {i} is not an object"),
            });
        };
        let share = match creator.get("share") {
            Some(Value::String(s)) => Some(integer_or_zero(document, "share", s)),
            _ => None,
        };
        if let Some(share) = share {
            creator.insert("share".to_string(), json!(share));
            modified = true;
        }
    }
    Ok(modified)
}

fn coerce_attributes(document: &str, obj: &mut Map<String, Value>) -> bool {
    let Some(attributes) = obj.get_mut("attributes").filter(|a| a.is_object()) else {
        return false;
    };
    let Value::Object(map) = attributes.take() else {
        return false;
    };

    debug!("{document}: attributes as object ({} entries)", map.len());
    let rewritten = map
        .into_iter()
        .map(|(trait_type, value)| json!({ "trait_type": trait_type, "value": value }))
        .collect();
    *attributes = Value::Array(rewritten);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn normalized(doc: &str) -> Value {
        let out = normalize_document("test.json", doc.as_bytes()).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_canonical_document_is_returned_unchanged() {
        let doc = r#"{"name":"A","seller_fee_basis_points":500,
            "attributes":[{"trait_type":"Hat","value":"Red"}],
            "properties":{"files":[{"type":"image/png","uri":"a.png"}]}}"#;
        let out = normalize_document("a.json", doc.as_bytes()).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, doc.as_bytes());
    }

    #[test]
    fn test_seller_fee_coercions() {
        assert_eq!(normalized(r#"{"seller_fee_basis_points": 500.0}"#)[SELLER_FEE], json!(500));
        assert_eq!(normalized(r#"{"seller_fee_basis_points": 42.9}"#)[SELLER_FEE], json!(42));
        assert_eq!(normalized(r#"{"seller_fee_basis_points": "250"}"#)[SELLER_FEE], json!(250));
        assert_eq!(normalized(r#"{"seller_fee_basis_points": "lots"}"#)[SELLER_FEE], json!(0));
        assert_eq!(normalized(r#"{"seller_fee_basis_points": ""}"#)[SELLER_FEE], json!(0));
    }

    #[test]
    fn test_non_numeric_strings_decode_as_zero() {
        let doc = r#"{"name": "Moon #3", "seller_fee_basis_points": "n/a",
                      "properties": {"creators": [{"address": "X", "share": "abc"},
                                                  {"address": "Y", "share": "25"}]}}"#;
        let md = decode_document("3.json", doc.as_bytes()).unwrap();
        assert_eq!(md.seller_fee_basis_points, 0);
        let shares: Vec<i64> = md.properties.creators.unwrap().iter().map(|c| c.share).collect();
        assert_eq!(shares, vec![0, 25]);
    }

    #[test]
    fn test_collection_string_becomes_object() {
        let v = normalized(r#"{"collection": "Moons"}"#);
        assert_eq!(v["collection"], json!({"name": "Moons", "family": "Moons"}));
    }

    #[test]
    fn test_collection_array_keeps_first_element() {
        let v = normalized(r#"{"collection": [{"name": "A", "family": "F"}, {"name": "B"}]}"#);
        assert_eq!(v["collection"], json!({"name": "A", "family": "F"}));

        let v = normalized(r#"{"collection": ["Moons"]}"#);
        assert_eq!(v["collection"], json!({"name": "Moons", "family": "Moons"}));

        let v = normalized(r#"{"collection": []}"#);
        assert_eq!(v["collection"], Value::Null);
    }

    #[test]
    fn test_files_object_is_wrapped() {
        let v = normalized(r#"{"properties": {"files": {"type": "image/png", "uri": "a.png"}}}"#);
        assert_eq!(v["properties"]["files"], json!([{"type": "image/png", "uri": "a.png"}]));
    }

    #[test]
    fn test_files_uri_strings_become_objects() {
        let v = normalized(r#"{"properties": {"files": ["a.png", "b.png"]}}"#);
        assert_eq!(
            v["properties"]["files"],
            json!([{"type": "image", "uri": "a.png"}, {"type": "image", "uri": "b.png"}])
        );
    }

    #[test]
    fn test_creator_share_string_becomes_integer() {
        let v = normalized(
            r#"{"properties": {"creators": [{"address": "X", "share": "60", "verified": true},
                                            {"address": "Y", "share": 40}]}}"#,
        );
        assert_eq!(
            v["properties"]["creators"],
            json!([{"address": "X", "share": 60, "verified": true}, {"address": "Y", "share": 40}])
        );
    }

    #[test]
    fn test_creators_with_non_object_element_fail() {
        let doc = r#"{"properties": {"creators": [{"address": "X", "share": 100}, "Y"]}}"#;
        let err = normalize_document("bad.json", doc.as_bytes()).unwrap_err();
        match err {
            MoonrankError::Normalization { document, field, .. } => {
                assert_eq!(document, "bad.json");
                assert_eq!(field, "properties.creators");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_attributes_object_becomes_array_in_key_order() {
        let v = normalized(r#"{"attributes": {"Hat": "Red", "Eyes": "Blue", "Body": "Gold"}}"#);
        assert_eq!(
            v["attributes"],
            json!([
                {"trait_type": "Hat", "value": "Red"},
                {"trait_type": "Eyes", "value": "Blue"},
                {"trait_type": "Body", "value": "Gold"}
            ])
        );
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = normalize_document("broken.json", b"{not json").unwrap_err();
        assert!(matches!(err, MoonrankError::Parse { .. }));

        let err = normalize_document("array.json", b"[1, 2]").unwrap_err();
        assert!(matches!(err, MoonrankError::Parse { .. }));
    }

    #[test]
    fn test_decode_document_after_normalisation() {
        let doc = r#"{"name": "Moon #7", "collection": "Moons", "seller_fee_basis_points": "500",
                      "attributes": {"Hat": "Red", "Level": 3},
                      "properties": {"files": "ignored-shape", "creators": [{"address": "X", "share": "100"}]}}"#;
        // `files` as a bare string is not a recognised variant and fails typed decoding.
        assert!(decode_document("moon.json", doc.as_bytes()).is_err());

        let doc = doc.replace(r#""ignored-shape""#, r#"["a.png"]"#);
        let md = decode_document("moon.json", doc.as_bytes()).unwrap();
        assert_eq!(md.name, "Moon #7");
        assert_eq!(md.seller_fee_basis_points, 500);
        assert_eq!(md.collection.unwrap().family, "Moons");
        assert_eq!(md.attributes.len(), 2);
        assert_eq!(md.attributes[1].value, "3");
        assert_eq!(md.properties.files[0].file_type, "image");
        assert_eq!(md.properties.creators.unwrap()[0].share, 100);
    }
}
