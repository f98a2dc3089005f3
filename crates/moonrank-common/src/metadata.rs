//! Canonical, strongly-typed asset metadata.
//!
//! These types are decoded only after a raw document has been through the
//! schema normaliser, so every field here has exactly one accepted shape.
//! Missing and `null` fields fall back to their zero value.

use serde::{Deserialize, Deserializer, Serialize};

/// One trait occurrence on an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    /// Trait category, e.g. "Background"
    #[serde(default, deserialize_with = "null_as_default")]
    pub trait_type: String,
    /// Trait value; numbers and booleans are kept as their JSON text
    #[serde(default, deserialize_with = "trait_value")]
    pub value: String,
    /// Zero-based index among repeated occurrences of the same category
    #[serde(default)]
    pub slot: usize,
    /// Placeholder added to satisfy the collection shape
    #[serde(default, skip_serializing_if = "is_false")]
    pub injected: bool,
    /// Value before a value remapping was applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_mapping: Option<String>,
}

impl MetadataAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Empty placeholder occurrence for `trait_type` at `slot`.
    pub fn injected(trait_type: impl Into<String>, slot: usize) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: String::new(),
            slot,
            injected: true,
            pre_mapping: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFile {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub file_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataCreator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub share: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataProperties {
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<MetadataFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<MetadataCreator>>,
}

/// A single asset's metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display name, used as the secondary ranking key
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<MetadataAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<MetadataCollection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: MetadataProperties,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seller_fee_basis_points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_authority: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepted shapes of an attribute value.
#[derive(Deserialize)]
#[serde(untagged)]
enum TraitValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Null,
}

fn trait_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TraitValue::deserialize(deserializer)? {
        TraitValue::Text(s) => s,
        TraitValue::Number(n) => n.to_string(),
        TraitValue::Flag(b) => b.to_string(),
        TraitValue::Null => String::new(),
    })
}
