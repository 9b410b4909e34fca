//! Value-units and field values.
//!
//! A value-unit is a single field reading (`{value|text, term?, units?}`).
//! Multi-valued fields hold an ordered list of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single field reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueUnit {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub value: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub text: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub term: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub units: Option<String>,
    /// Any other keys the spreadsheet conversion attached.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ValueUnit {
    /// Build a `{value}` reading.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Build a `{text, term}` ontology reading.
    pub fn ontology(text: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Attach measurement units.
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Free text if present, else the plain value.
    pub fn display_value(&self) -> Option<&str> {
        self.text.as_deref().or(self.value.as_deref())
    }

    /// Free text and term, when the reading carries both.
    pub fn ontology_pair(&self) -> Option<(&str, &str)> {
        match (self.text.as_deref(), self.term.as_deref()) {
            (Some(text), Some(term)) => Some((text, term)),
            _ => None,
        }
    }

    /// Every string-valued sub-key in a fixed order: value, text, term,
    /// units, then extra keys alphabetically.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries = Vec::new();
        let named = [
            ("value", &self.value),
            ("text", &self.text),
            ("term", &self.term),
            ("units", &self.units),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                entries.push((key, value.as_str()));
            }
        }
        for (key, value) in &self.extra {
            if let Value::String(value) = value {
                entries.push((key.as_str(), value.as_str()));
            }
        }
        entries
    }
}

/// Accept strings, numbers and booleans; spreadsheet cells are not always text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar, found {other}"
        ))),
    }
}

/// A field is either one reading or an ordered list of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<ValueUnit>),
    Scalar(ValueUnit),
}

impl FieldValue {
    /// Readings with their list index (`None` for scalar fields).
    pub fn units(&self) -> Vec<(Option<usize>, &ValueUnit)> {
        match self {
            FieldValue::Scalar(unit) => vec![(None, unit)],
            FieldValue::List(units) => units
                .iter()
                .enumerate()
                .map(|(index, unit)| (Some(index), unit))
                .collect(),
        }
    }

    /// First reading, used where a list stands in for a single link.
    pub fn first(&self) -> Option<&ValueUnit> {
        match self {
            FieldValue::Scalar(unit) => Some(unit),
            FieldValue::List(units) => units.first(),
        }
    }
}
