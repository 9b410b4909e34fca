//! Records and submissions.
//!
//! A record is a mapping from field name to [`FieldValue`] plus two reserved
//! sub-records: the core section (keyed `samples_core` or `experiments_core`
//! depending on the rules domain) and the `custom` section.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::value::FieldValue;

/// Key of the submitter-defined sub-record.
pub const CUSTOM_KEY: &str = "custom";

/// Fields of one section, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: BTreeMap<String, FieldValue>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object whose values are value-units or lists of them.
    pub fn from_json(section: &str, value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::SectionNotObject {
                section: section.to_string(),
            });
        };
        Self::from_map(map, &[])
    }

    fn from_map(map: &Map<String, Value>, reserved: &[&str]) -> Result<Self> {
        let mut fields = BTreeMap::new();
        for (name, raw) in map {
            if reserved.contains(&name.as_str()) {
                continue;
            }
            let value = serde_json::from_value::<FieldValue>(raw.clone()).map_err(|source| {
                ModelError::InvalidField {
                    field: name.clone(),
                    source,
                }
            })?;
            fields.insert(name.clone(), value);
        }
        Ok(Self { fields })
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One submitted record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Fields declared by the record type schema.
    pub fields: FieldSet,
    /// Core sub-record, present when the rules domain declares one.
    pub core: Option<FieldSet>,
    /// Submitter-defined fields.
    pub custom: FieldSet,
}

impl Record {
    /// Shape a JSON record.
    ///
    /// `core_key` names the core sub-record for this rules domain. A record
    /// that omits it gets an empty core section so core-level presence
    /// checks still run.
    pub fn from_json(index: usize, value: &Value, core_key: Option<&str>) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::RecordNotObject { index });
        };
        let mut reserved = vec![CUSTOM_KEY];
        if let Some(key) = core_key {
            reserved.push(key);
        }
        let fields = FieldSet::from_map(map, &reserved)?;
        let core = match core_key {
            Some(key) => Some(match map.get(key) {
                Some(section) => FieldSet::from_json(key, section)?,
                None => FieldSet::new(),
            }),
            None => None,
        };
        let custom = match map.get(CUSTOM_KEY) {
            Some(section) => FieldSet::from_json(CUSTOM_KEY, section)?,
            None => FieldSet::new(),
        };
        Ok(Self {
            fields,
            core,
            custom,
        })
    }

    /// Resolve the display name of the record.
    ///
    /// Looks for `name_field` in the custom section first, then among the
    /// type fields, and uses its text (or value). Falls back to
    /// `record_{index + 1}`.
    pub fn display_name(&self, name_field: &str, index: usize) -> String {
        self.custom
            .get(name_field)
            .or_else(|| self.fields.get(name_field))
            .and_then(FieldValue::first)
            .and_then(|unit| unit.display_value())
            .filter(|name| !name.trim().is_empty())
            .map_or_else(|| format!("record_{}", index + 1), str::to_string)
    }

    /// Every field of every section, in section order type, core, custom.
    pub fn all_fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .chain(self.core.iter().flat_map(FieldSet::iter))
            .chain(self.custom.iter())
    }
}

/// A whole submission: record type name to its raw JSON records.
///
/// Records stay raw until the rules domain (and so the core key) is known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    sections: BTreeMap<String, Vec<Value>>,
}

impl Submission {
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::SubmissionNotObject);
        };
        let mut sections = BTreeMap::new();
        for (record_type, records) in map {
            let Value::Array(records) = records else {
                return Err(ModelError::RecordsNotList {
                    record_type: record_type.clone(),
                });
            };
            sections.insert(record_type.clone(), records.clone());
        }
        Ok(Self { sections })
    }

    pub fn insert(&mut self, record_type: impl Into<String>, records: Vec<Value>) {
        self.sections.insert(record_type.into(), records);
    }

    pub fn contains(&self, record_type: &str) -> bool {
        self.sections.contains_key(record_type)
    }

    pub fn records(&self, record_type: &str) -> Option<&[Value]> {
        self.sections.get(record_type).map(Vec::as_slice)
    }

    pub fn record_types(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Parse every record of one record type.
    pub fn parse_records(&self, record_type: &str, core_key: Option<&str>) -> Result<Vec<Record>> {
        self.records(record_type)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, value)| Record::from_json(index, value, core_key))
            .collect()
    }
}
