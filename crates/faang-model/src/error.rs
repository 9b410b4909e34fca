use thiserror::Error;

/// Errors raised while shaping submitted JSON into typed records.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("submission must be a JSON object keyed by record type")]
    SubmissionNotObject,

    #[error("record type '{record_type}' must hold a list of records")]
    RecordsNotList { record_type: String },

    #[error("record {index} must be a JSON object")]
    RecordNotObject { index: usize },

    #[error("section '{section}' must be a JSON object")]
    SectionNotObject { section: String },

    #[error("field '{field}' is neither a value-unit nor a list of value-units: {source}")]
    InvalidField {
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
