use icu_print_core::Node;
use thiserror::Error;

use crate::ast_json::decode_message;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns ICU message source text into a syntax tree.
pub trait MessageParser {
    fn parse(&self, source: &str) -> Result<Vec<Node>, ParseError>;
}

/// Normalizes nested plural/select branches before printing.
pub trait SelectorHoister {
    fn hoist(&self, nodes: Vec<Node>) -> Vec<Node>;
}

/// Hoister for trees that were normalized upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlreadyHoisted;

impl SelectorHoister for AlreadyHoisted {
    fn hoist(&self, nodes: Vec<Node>) -> Vec<Node> {
        nodes
    }
}

/// Parser whose source text is a serialized formatjs syntax tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAstParser;

impl MessageParser for JsonAstParser {
    fn parse(&self, source: &str) -> Result<Vec<Node>, ParseError> {
        decode_message(source).map_err(|err| ParseError::new(err.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTextParser;

impl MessageParser for NoTextParser {
    fn parse(&self, _source: &str) -> Result<Vec<Node>, ParseError> {
        Err(ParseError::new(
            "message source text is not supported; extract messages as ast",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{AlreadyHoisted, JsonAstParser, MessageParser, NoTextParser, SelectorHoister};
    use icu_print_core::Node;

    #[test]
    fn already_hoisted_returns_input() {
        let nodes = vec![Node::literal("a"), Node::argument("b")];
        assert_eq!(AlreadyHoisted.hoist(nodes.clone()), nodes);
    }

    #[test]
    fn json_ast_parser_decodes_source() {
        let nodes = JsonAstParser
            .parse(r#"[{"type":0,"value":"hi "},{"type":1,"value":"who"}]"#)
            .expect("parse");
        assert_eq!(nodes, vec![Node::literal("hi "), Node::argument("who")]);
    }

    #[test]
    fn json_ast_parser_reports_decode_errors() {
        let err = JsonAstParser
            .parse(r#"[{"type":42}]"#)
            .expect_err("unknown type");
        assert_eq!(err.message, "unknown element type 42");
    }

    #[test]
    fn no_text_parser_rejects_everything() {
        assert!(NoTextParser.parse("Hello").is_err());
        assert!(NoTextParser.parse("").is_err());
    }
}
