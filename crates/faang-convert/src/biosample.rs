//! BioSamples record shape.

use std::collections::BTreeMap;

use faang_model::{FieldValue, ValueUnit};
use serde::Serialize;
use serde_json::Value;

const OBO_PURL: &str = "http://purl.obolibrary.org/obo/";

/// One sample as submitted to BioSamples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BioSample {
    pub alias: String,
    pub title: String,
    pub release_date: String,
    pub taxon_id: u64,
    pub taxon: String,
    pub attributes: BTreeMap<String, Vec<Attribute>>,
    pub sample_relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terms: Vec<TermUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl Attribute {
    /// Attribute of a value-unit: text (else value), term URL and units.
    pub fn from_unit(unit: &ValueUnit) -> Self {
        Self {
            value: unit.display_value().map(str::to_string),
            terms: unit.term.as_deref().map(TermUrl::for_term).into_iter().collect(),
            units: unit.units.clone(),
        }
    }

    /// Attribute of a raw cell of a special sheet.
    pub fn from_cell(cell: &Value) -> Self {
        let value = match cell {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        };
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn list(value: &FieldValue) -> Vec<Self> {
        value.units().into_iter().map(|(_, unit)| Self::from_unit(unit)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermUrl {
    pub url: String,
}

impl TermUrl {
    /// OBO PURL of a term such as `UBERON:0000178`.
    pub fn for_term(term: &str) -> Self {
        Self {
            url: format!("{OBO_PURL}{}", term.replace(':', "_")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelationshipNature {
    #[serde(rename = "same as")]
    SameAs,
    #[serde(rename = "child of")]
    ChildOf,
    #[serde(rename = "derived from")]
    DerivedFrom,
}

impl RelationshipNature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameAs => "same as",
            Self::ChildOf => "child of",
            Self::DerivedFrom => "derived from",
        }
    }

    /// Record field that declares this relationship.
    pub fn field(&self) -> &'static str {
        match self {
            Self::SameAs => "same_as",
            Self::ChildOf => "child_of",
            Self::DerivedFrom => "derived_from",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub alias: String,
    pub relationship_nature: RelationshipNature,
}

/// BioSamples attribute name of a FAANG field.
pub fn attribute_name(field: &str) -> String {
    field.replace('_', " ")
}
