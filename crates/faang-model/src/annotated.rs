//! Records annotated for display.
//!
//! An [`AnnotatedRecord`] mirrors the submitted record, with `errors` and
//! `warnings` attached to the value-unit they concern. Issues are addressed by
//! section, field name and optional list index ([`FieldAddress`]); nodes for
//! fields the submitter left out are created on first annotation.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::enums::{Section, Severity};
use crate::record::{CUSTOM_KEY, FieldSet, Record};
use crate::value::{FieldValue, ValueUnit};

/// Position of a value-unit inside one section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldAddress {
    pub field: String,
    /// Element index for list-valued fields.
    pub index: Option<usize>,
}

impl FieldAddress {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            index: None,
        }
    }

    pub fn element(field: impl Into<String>, index: Option<usize>) -> Self {
        Self {
            field: field.into(),
            index,
        }
    }
}

/// A value-unit with the issues attached to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotatedValue {
    #[serde(flatten)]
    pub unit: ValueUnit,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl AnnotatedValue {
    pub fn new(unit: ValueUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Error => self.errors.push(message),
            Severity::Warning => self.warnings.push(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnnotatedField {
    Scalar(AnnotatedValue),
    List(Vec<AnnotatedValue>),
}

impl AnnotatedField {
    fn from_value(value: &FieldValue) -> Self {
        match value {
            FieldValue::Scalar(unit) => AnnotatedField::Scalar(AnnotatedValue::new(unit.clone())),
            FieldValue::List(units) => AnnotatedField::List(
                units
                    .iter()
                    .cloned()
                    .map(AnnotatedValue::new)
                    .collect(),
            ),
        }
    }

    /// The node an index designates. A scalar answers to any index; a list
    /// without an index resolves to its first element; missing elements are
    /// padded in.
    fn node_mut(&mut self, index: Option<usize>) -> &mut AnnotatedValue {
        match self {
            AnnotatedField::Scalar(value) => value,
            AnnotatedField::List(values) => {
                let position = index.unwrap_or(0);
                if values.len() <= position {
                    values.resize_with(position + 1, AnnotatedValue::default);
                }
                &mut values[position]
            }
        }
    }

    /// Value-units of this field with their annotations.
    pub fn values(&self) -> Vec<&AnnotatedValue> {
        match self {
            AnnotatedField::Scalar(value) => vec![value],
            AnnotatedField::List(values) => values.iter().collect(),
        }
    }
}

/// Annotated fields of one section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnnotatedSection {
    fields: BTreeMap<String, AnnotatedField>,
}

impl AnnotatedSection {
    pub fn from_fields(fields: &FieldSet) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(name, value)| (name.to_string(), AnnotatedField::from_value(value)))
                .collect(),
        }
    }

    /// Append an issue at `address`, creating the node if needed.
    pub fn annotate(&mut self, address: &FieldAddress, severity: Severity, message: impl Into<String>) {
        let field = self
            .fields
            .entry(address.field.clone())
            .or_insert_with(|| match address.index {
                Some(_) => AnnotatedField::List(Vec::new()),
                None => AnnotatedField::Scalar(AnnotatedValue::default()),
            });
        field.node_mut(address.index).push(severity, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&AnnotatedField> {
        self.fields.get(field)
    }

    /// Node at an address, if it exists.
    pub fn node(&self, address: &FieldAddress) -> Option<&AnnotatedValue> {
        match self.fields.get(&address.field)? {
            AnnotatedField::Scalar(value) => Some(value),
            AnnotatedField::List(values) => values.get(address.index.unwrap_or(0)),
        }
    }

    /// Total number of annotations in this section.
    pub fn annotation_count(&self) -> usize {
        self.fields
            .values()
            .flat_map(AnnotatedField::values)
            .map(|value| value.errors.len() + value.warnings.len())
            .sum()
    }
}

/// Display copy of a record with positional annotations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedRecord {
    pub fields: AnnotatedSection,
    /// Core section together with the key it is serialized under.
    pub core: Option<(String, AnnotatedSection)>,
    pub custom: AnnotatedSection,
}

impl AnnotatedRecord {
    /// Skeleton mirroring `record`, with no annotations yet.
    pub fn from_record(record: &Record, core_key: Option<&str>) -> Self {
        let core = match (core_key, record.core.as_ref()) {
            (Some(key), Some(core)) => Some((key.to_string(), AnnotatedSection::from_fields(core))),
            (Some(key), None) => Some((key.to_string(), AnnotatedSection::default())),
            (None, _) => None,
        };
        Self {
            fields: AnnotatedSection::from_fields(&record.fields),
            core,
            custom: AnnotatedSection::from_fields(&record.custom),
        }
    }

    /// Section subtree. Records without a core section get one on demand.
    pub fn section_mut(&mut self, section: Section) -> &mut AnnotatedSection {
        match section {
            Section::Type => &mut self.fields,
            Section::Custom => &mut self.custom,
            Section::Core => {
                &mut self
                    .core
                    .get_or_insert_with(|| ("core".to_string(), AnnotatedSection::default()))
                    .1
            }
        }
    }

    pub fn section(&self, section: Section) -> Option<&AnnotatedSection> {
        match section {
            Section::Type => Some(&self.fields),
            Section::Custom => Some(&self.custom),
            Section::Core => self.core.as_ref().map(|(_, core)| core),
        }
    }

    pub fn annotation_count(&self) -> usize {
        self.fields.annotation_count()
            + self
                .core
                .as_ref()
                .map_or(0, |(_, core)| core.annotation_count())
            + self.custom.annotation_count()
    }
}

impl Serialize for AnnotatedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, field) in &self.fields.fields {
            map.serialize_entry(name, field)?;
        }
        if let Some((key, core)) = &self.core {
            map.serialize_entry(key, core)?;
        }
        map.serialize_entry(CUSTOM_KEY, &self.custom)?;
        map.end()
    }
}
