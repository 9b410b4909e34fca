//! RuleSet accessor.
//!
//! Rule schemas are addressed by URL. A [`RuleSetSource`] turns a URL into a
//! JSON document; [`fetch_rule_schemas`] loads and parses every fragment a
//! record type's layout calls for.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

use crate::catalog::{RecordTypeSpec, RulesDomain};
use crate::config::CheckConfig;
use crate::error::{Result, RulesError};
use crate::schema::SchemaFragment;

/// Something that can produce a rule schema document for a URL.
pub trait RuleSetSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Value>;
}

/// Rule schemas stored as files in one directory.
///
/// A URL maps to the file named by its last path segment. Documents are
/// cached for the lifetime of the value.
#[derive(Debug)]
pub struct DirectoryRuleSet {
    root: PathBuf,
    cache: Mutex<BTreeMap<String, Value>>,
}

impl DirectoryRuleSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(BTreeMap::new()),
        }
    }

    /// Local path for a schema URL.
    pub fn path_for(&self, url: &str) -> PathBuf {
        let trimmed = url.split(['?', '#']).next().unwrap_or(url);
        let file_name = trimmed.rsplit('/').next().unwrap_or(trimmed);
        self.root.join(file_name)
    }

    fn cached(&self, url: &str) -> Option<Value> {
        self.cache.lock().ok()?.get(url).cloned()
    }
}

impl RuleSetSource for DirectoryRuleSet {
    fn fetch(&self, url: &str) -> Result<Value> {
        if let Some(document) = self.cached(url) {
            return Ok(document);
        }
        let path = self.path_for(url);
        debug!(url, path = %path.display(), "reading rule schema");
        let text = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RulesError::SchemaNotFound {
                    url: url.to_string(),
                }
            } else {
                RulesError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        let document: Value = serde_json::from_str(&text).map_err(|source| RulesError::Json {
            url: url.to_string(),
            source,
        })?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(url.to_string(), document.clone());
        }
        Ok(document)
    }
}

/// Rule schemas held in memory, keyed by URL.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleSet {
    documents: BTreeMap<String, Value>,
}

impl InMemoryRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }
}

impl RuleSetSource for InMemoryRuleSet {
    fn fetch(&self, url: &str) -> Result<Value> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| RulesError::SchemaNotFound {
                url: url.to_string(),
            })
    }
}

/// Parsed fragments describing one record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSchemas {
    pub type_fragment: SchemaFragment,
    pub core: Option<SchemaFragment>,
    /// Module fragment of the ChIP-seq record types. Loaded and parsed, not
    /// read by any check yet.
    pub module: Option<SchemaFragment>,
}

/// Fetch the fragments a record type's layout calls for.
pub fn fetch_rule_schemas(
    source: &dyn RuleSetSource,
    spec: &RecordTypeSpec,
    domain: &RulesDomain,
    config: &CheckConfig,
) -> Result<RuleSchemas> {
    let type_fragment = SchemaFragment::parse(&source.fetch(&spec.url)?, config)?;

    let core = if spec.layout.has_core() {
        let url = domain
            .core_url
            .as_deref()
            .ok_or_else(|| RulesError::MissingCoreUrl {
                record_type: spec.name.clone(),
            })?;
        Some(SchemaFragment::parse(&source.fetch(url)?, config)?)
    } else {
        None
    };

    let module = if spec.layout.has_module() {
        let url = spec
            .module_url
            .as_deref()
            .ok_or_else(|| RulesError::MissingModuleUrl {
                record_type: spec.name.clone(),
            })?;
        Some(SchemaFragment::parse(&source.fetch(url)?, config)?)
    } else {
        None
    };

    debug!(
        record_type = %spec.name,
        type_fields = type_fragment.len(),
        core_fields = core.as_ref().map_or(0, SchemaFragment::len),
        has_module = module.is_some(),
        "rule schemas loaded"
    );

    Ok(RuleSchemas {
        type_fragment,
        core,
        module,
    })
}
