//! Typed schema fragments.
//!
//! A rule schema is a JSON-schema document whose `properties` describe the
//! fields of one sub-structure of a record. Each field is an object
//! (`type: object`) or a list of objects (`type: array`); its obligation is
//! the `const` of the nested `mandatory` property. Properties of any other
//! type are left unclassified. The document is validated once here and
//! never re-inspected per record.

use std::collections::{BTreeMap, BTreeSet};

use faang_model::Obligation;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::{Result, RulesError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Scalar,
    List,
}

/// Declaration of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub shape: FieldShape,
    pub obligation: Obligation,
    /// Accepted ontology sources, lower-cased. `Some` when the field is an
    /// ontology field (declares both `text` and `term`); the set is empty
    /// when no `ontology_name` restriction is declared.
    pub ontology_sources: Option<BTreeSet<String>>,
}

/// Parsed schema fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaFragment {
    pub fields: BTreeMap<String, FieldSchema>,
    /// Declared properties left out by the skip-list, or not declared as an
    /// object or array.
    pub skipped: BTreeSet<String>,
}

impl SchemaFragment {
    /// Parse a rule schema document.
    pub fn parse(document: &Value, config: &CheckConfig) -> Result<Self> {
        let properties = document
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| RulesError::malformed("schema has no 'properties' object"))?;

        let mut fragment = SchemaFragment::default();
        for (name, declaration) in properties {
            if config.is_skipped(name) {
                fragment.skipped.insert(name.clone());
                continue;
            }
            match parse_field(name, declaration)? {
                Some(field) => {
                    fragment.fields.insert(name.clone(), field);
                }
                None => {
                    fragment.skipped.insert(name.clone());
                }
            }
        }
        Ok(fragment)
    }

    pub fn get(&self, field: &str) -> Option<&FieldSchema> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `None` for a property that is neither an object nor an array.
fn parse_field(name: &str, declaration: &Value) -> Result<Option<FieldSchema>> {
    let kind = declaration.get("type").and_then(Value::as_str);
    let (shape, properties) = match kind {
        Some("object") => (FieldShape::Scalar, declaration.get("properties")),
        Some("array") => (FieldShape::List, declaration.pointer("/items/properties")),
        other => {
            debug!(field = name, kind = other.unwrap_or("<none>"), "property left unclassified");
            return Ok(None);
        }
    };
    let properties = properties.and_then(Value::as_object).ok_or_else(|| {
        RulesError::malformed(format!("field '{name}' declares no item properties"))
    })?;

    let tag = properties
        .get("mandatory")
        .and_then(|mandatory| mandatory.get("const"))
        .and_then(Value::as_str)
        .ok_or_else(|| RulesError::InvalidObligation {
            field: name.to_string(),
            message: "missing 'mandatory.const'".to_string(),
        })?;
    let obligation = tag
        .parse::<Obligation>()
        .map_err(|message| RulesError::InvalidObligation {
            field: name.to_string(),
            message,
        })?;

    Ok(Some(FieldSchema {
        shape,
        obligation,
        ontology_sources: ontology_sources(properties),
    }))
}

/// Ontology sources of a field whose properties declare `text` and `term`.
fn ontology_sources(properties: &Map<String, Value>) -> Option<BTreeSet<String>> {
    if !(properties.contains_key("text") && properties.contains_key("term")) {
        return None;
    }
    let mut sources = BTreeSet::new();
    if let Some(ontology_name) = properties.get("ontology_name") {
        if let Some(name) = ontology_name.get("const").and_then(Value::as_str) {
            sources.insert(name.to_lowercase());
        } else if let Some(names) = ontology_name.get("enum").and_then(Value::as_array) {
            sources.extend(
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_lowercase),
            );
        }
    }
    Some(sources)
}
