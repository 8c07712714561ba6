#![forbid(unsafe_code)]

mod ast_json;
mod error;
mod model;
mod source;
mod transform;

pub use crate::ast_json::{decode_message, decode_message_value};
pub use crate::error::{AstError, CatalogError, CatalogResult};
pub use crate::model::{
    Catalog, CatalogEntry, DefaultMessage, ExtractedMessage, ExtractedMessages, read_compiled,
    read_extracted,
};
pub use crate::source::{
    AlreadyHoisted, JsonAstParser, MessageParser, NoTextParser, ParseError, SelectorHoister,
};
pub use crate::transform::{format_catalog, format_entry, print_compiled, render_description};
