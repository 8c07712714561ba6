use std::collections::BTreeMap;

use icu_print_core::print_message;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::ast_json::decode_message_value;
use crate::error::{CatalogError, CatalogResult};
use crate::model::{Catalog, CatalogEntry, DefaultMessage, ExtractedMessage};
use crate::source::{MessageParser, SelectorHoister};

/// Formats every extracted message into a catalog entry.
///
/// Stops at the first entry that fails; the error carries its id.
pub fn format_catalog<'a, I, K>(
    messages: I,
    parser: &dyn MessageParser,
    hoister: &dyn SelectorHoister,
) -> CatalogResult<Catalog>
where
    I: IntoIterator<Item = (K, &'a ExtractedMessage)>,
    K: AsRef<str>,
{
    let mut catalog = BTreeMap::new();
    for (id, message) in messages {
        let id = id.as_ref();
        let entry = format_entry(id, message, parser, hoister).inspect_err(|err| {
            warn!(id, error = %err, "failed to format message");
        })?;
        catalog.insert(id.to_string(), entry);
    }
    info!(entries = catalog.len(), "formatted catalog");
    Ok(catalog)
}

pub fn format_entry(
    id: &str,
    message: &ExtractedMessage,
    parser: &dyn MessageParser,
    hoister: &dyn SelectorHoister,
) -> CatalogResult<CatalogEntry> {
    let nodes = match &message.default_message {
        DefaultMessage::Source(source) => parser.parse(source).map_err(|err| CatalogError::Parse {
            id: id.to_string(),
            message: err.message,
        })?,
        DefaultMessage::Ast(value) => decode_message_value(value).map_err(|source| CatalogError::Ast {
            id: id.to_string(),
            source,
        })?,
    };
    let nodes = hoister.hoist(nodes);
    let printed = print_message(&nodes);
    let description = render_description(message.description.as_ref()).map_err(|source| {
        CatalogError::Description {
            id: id.to_string(),
            source,
        }
    })?;
    debug!(id, output = %printed, "formatted message");
    Ok(CatalogEntry {
        message: printed,
        description,
    })
}

/// Plain string descriptions pass through; any other value, `null`
/// included, is serialized to compact JSON.
pub fn render_description(
    description: Option<&Value>,
) -> Result<Option<String>, serde_json::Error> {
    match description {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => serde_json::to_string(other).map(Some),
    }
}

/// Prints already compiled syntax trees, keyed by message id.
pub fn print_compiled<'a, I, K>(asts: I) -> CatalogResult<BTreeMap<String, String>>
where
    I: IntoIterator<Item = (K, &'a Value)>,
    K: AsRef<str>,
{
    let mut out = BTreeMap::new();
    for (id, value) in asts {
        let id = id.as_ref();
        let nodes = decode_message_value(value).map_err(|source| CatalogError::Ast {
            id: id.to_string(),
            source,
        })?;
        let printed = print_message(&nodes);
        debug!(id, output = %printed, "printed message");
        out.insert(id.to_string(), printed);
    }
    info!(entries = out.len(), "printed compiled messages");
    Ok(out)
}
