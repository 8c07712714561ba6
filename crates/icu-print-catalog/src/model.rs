use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CatalogResult;

/// `defaultMessage` as written by `formatjs extract`, either ICU text or
/// the parsed tree when extracted with `--ast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultMessage {
    Source(String),
    Ast(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMessage {
    pub default_message: DefaultMessage,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Value>,
}

// a present `null` stays `Some(Value::Null)`; only a missing key is `None`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub type ExtractedMessages = IndexMap<String, ExtractedMessage>;
pub type Catalog = BTreeMap<String, CatalogEntry>;

pub fn read_extracted(input: &str) -> CatalogResult<ExtractedMessages> {
    Ok(serde_json::from_str(input)?)
}

pub fn read_compiled(input: &str) -> CatalogResult<IndexMap<String, Value>> {
    Ok(serde_json::from_str(input)?)
}
