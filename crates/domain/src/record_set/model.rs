use crate::errors::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One cell of an info-tuple.
///
/// Info-tuples carry whatever the producer put in them (ids, names, indexes,
/// group lists), so every JSON shape is accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<InfoValue>),
    Object(BTreeMap<String, InfoValue>),
}

impl InfoValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for InfoValue {
    fn from(value: &str) -> Self {
        InfoValue::String(value.to_string())
    }
}

impl From<String> for InfoValue {
    fn from(value: String) -> Self {
        InfoValue::String(value)
    }
}

impl From<u64> for InfoValue {
    fn from(value: u64) -> Self {
        InfoValue::Number(value.into())
    }
}

impl From<bool> for InfoValue {
    fn from(value: bool) -> Self {
        InfoValue::Bool(value)
    }
}

/// An `[address, domain]` pair, serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPair(pub String, pub String);

impl RecordPair {
    pub fn new(address: impl Into<String>, domain: impl Into<String>) -> Self {
        Self(address.into(), domain.into())
    }

    pub fn address(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AliasDefinition {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub root_domain: String,
    #[serde(default)]
    pub placeholder_type: String,
    #[serde(default)]
    pub health_filter: String,
    #[serde(default)]
    pub initial_health_check: String,
}

/// One versioned snapshot of records, their schema and aliases.
///
/// Two snapshots with the same `version` are treated as identical; contents
/// are never compared.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(rename = "record_keys", default, deserialize_with = "null_as_default")]
    pub keys: Vec<String>,

    #[serde(rename = "record_infos", default, deserialize_with = "null_as_default")]
    pub infos: Vec<Vec<InfoValue>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: BTreeMap<String, Vec<AliasDefinition>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<RecordPair>,
}

impl RecordSet {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::Decode(e.to_string()))
    }

    pub fn to_json_vec(&self) -> Result<Vec<u8>, DomainError> {
        serde_json::to_vec(self).map_err(|e| DomainError::Encode(e.to_string()))
    }

    /// Number of entries (info-tuple / record pairs).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.infos.is_empty()
    }

    pub fn key_index(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Checks that `infos` and `records` line up one to one.
    pub fn ensure_parallel(&self) -> Result<(), DomainError> {
        if self.infos.len() != self.records.len() {
            return Err(DomainError::ParallelismViolation {
                infos: self.infos.len(),
                records: self.records.len(),
            });
        }
        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
