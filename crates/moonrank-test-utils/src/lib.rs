//! Shared fixtures for moonrank tests.

use moonrank_common::{Metadata, MetadataAttribute, MetadataCollection, Mint};
use serde_json::{json, Value};

pub use pretty_assertions;

/// Builder for `Metadata` fixtures.
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    metadata: Metadata,
}

impl MetadataBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                name: name.into(),
                symbol: "MOON".to_string(),
                seller_fee_basis_points: 500,
                ..Default::default()
            },
        }
    }

    pub fn attribute(mut self, trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.attributes.push(MetadataAttribute::new(trait_type, value));
        self
    }

    pub fn collection(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.metadata.collection = Some(MetadataCollection { name: name.clone(), family: name });
        self
    }

    pub fn build(self) -> Metadata {
        self.metadata
    }

    /// Build as an unranked mint with the given identifier.
    pub fn mint(self, id: impl Into<String>) -> Mint {
        Mint::new(id, self.metadata)
    }
}

/// Unranked mint whose display name is its identifier.
pub fn mint_with_traits(id: &str, traits: &[(&str, &str)]) -> Mint {
    traits
        .iter()
        .fold(MetadataBuilder::new(id), |b, (t, v)| b.attribute(*t, *v))
        .mint(id)
}

/// Raw JSON document bytes in the canonical shape.
pub fn document_bytes(name: &str, traits: &[(&str, &str)]) -> Vec<u8> {
    let attributes: Vec<Value> = traits
        .iter()
        .map(|(t, v)| json!({ "trait_type": t, "value": v }))
        .collect();
    let doc = json!({
        "name": name,
        "symbol": "MOON",
        "description": "",
        "image": format!("{name}.png"),
        "attributes": attributes,
        "seller_fee_basis_points": 500,
        "properties": { "files": [{ "type": "image/png", "uri": format!("{name}.png") }] }
    });
    doc.to_string().into_bytes()
}
