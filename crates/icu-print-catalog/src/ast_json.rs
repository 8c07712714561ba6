//! Decoding of the JSON syntax trees emitted by `@formatjs/icu-messageformat-parser`.

use icu_print_core::{
    ArgStyle, DateTimeSkeleton, FormatArg, Node, NumberSkeleton, OptionList, PluralKind,
    SkeletonToken,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AstError;

const TYPE_LITERAL: u8 = 0;
const TYPE_ARGUMENT: u8 = 1;
const TYPE_NUMBER: u8 = 2;
const TYPE_DATE: u8 = 3;
const TYPE_TIME: u8 = 4;
const TYPE_SELECT: u8 = 5;
const TYPE_PLURAL: u8 = 6;
const TYPE_POUND: u8 = 7;
const TYPE_TAG: u8 = 8;

const SKELETON_NUMBER: u8 = 0;
const SKELETON_DATE_TIME: u8 = 1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawElement {
    #[serde(rename = "type")]
    kind: u8,
    value: Option<String>,
    style: Option<RawStyle>,
    options: Option<IndexMap<String, RawOption>>,
    offset: Option<u32>,
    plural_type: Option<String>,
    children: Option<Vec<RawElement>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStyle {
    Text(String),
    Skeleton(RawSkeleton),
}

#[derive(Debug, Deserialize)]
struct RawSkeleton {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    tokens: Vec<RawToken>,
    pattern: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawToken {
    stem: String,
    #[serde(default)]
    options: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    value: Vec<RawElement>,
}

pub fn decode_message(input: &str) -> Result<Vec<Node>, AstError> {
    let raw: Vec<RawElement> = serde_json::from_str(input)?;
    convert_elements(raw)
}

pub fn decode_message_value(value: &Value) -> Result<Vec<Node>, AstError> {
    let raw = Vec::<RawElement>::deserialize(value)?;
    convert_elements(raw)
}

fn convert_elements(raw: Vec<RawElement>) -> Result<Vec<Node>, AstError> {
    raw.into_iter().map(convert_element).collect()
}

fn convert_element(raw: RawElement) -> Result<Node, AstError> {
    match raw.kind {
        TYPE_LITERAL => Ok(Node::Literal(require(raw.value, "literal", "value")?)),
        TYPE_ARGUMENT => Ok(Node::Argument(require(raw.value, "argument", "value")?)),
        TYPE_NUMBER => Ok(Node::Number(convert_format_arg(raw, "number")?)),
        TYPE_DATE => Ok(Node::Date(convert_format_arg(raw, "date")?)),
        TYPE_TIME => Ok(Node::Time(convert_format_arg(raw, "time")?)),
        TYPE_SELECT => {
            let name = require(raw.value, "select", "value")?;
            let options = convert_options(require(raw.options, "select", "options")?)?;
            Ok(Node::select(name, options))
        }
        TYPE_PLURAL => {
            let name = require(raw.value, "plural", "value")?;
            let kind = match require(raw.plural_type, "plural", "pluralType")?.as_str() {
                "cardinal" => PluralKind::Cardinal,
                "ordinal" => PluralKind::Ordinal,
                other => return Err(AstError::UnknownPluralType(other.to_string())),
            };
            let options = convert_options(require(raw.options, "plural", "options")?)?;
            Ok(Node::plural(name, kind, raw.offset, options))
        }
        TYPE_POUND => Ok(Node::Pound),
        TYPE_TAG => {
            let name = require(raw.value, "tag", "value")?;
            let children = convert_elements(require(raw.children, "tag", "children")?)?;
            Ok(Node::tag(name, children))
        }
        other => Err(AstError::UnknownElementType(other)),
    }
}

fn convert_format_arg(raw: RawElement, element: &'static str) -> Result<FormatArg, AstError> {
    let name = require(raw.value, element, "value")?;
    let style = raw.style.map(convert_style).transpose()?;
    Ok(FormatArg { name, style })
}

fn convert_style(raw: RawStyle) -> Result<ArgStyle, AstError> {
    match raw {
        RawStyle::Text(text) => Ok(ArgStyle::Text(text)),
        RawStyle::Skeleton(skeleton) => match skeleton.kind {
            SKELETON_NUMBER => Ok(ArgStyle::Number(NumberSkeleton {
                tokens: skeleton
                    .tokens
                    .into_iter()
                    .map(|token| SkeletonToken {
                        stem: token.stem,
                        options: token.options,
                    })
                    .collect(),
            })),
            SKELETON_DATE_TIME => Ok(ArgStyle::DateTime(DateTimeSkeleton {
                pattern: require(skeleton.pattern, "skeleton", "pattern")?,
            })),
            other => Err(AstError::UnknownSkeletonType(other)),
        },
    }
}

fn convert_options(raw: IndexMap<String, RawOption>) -> Result<OptionList, AstError> {
    let mut options = OptionList::new();
    for (key, option) in raw {
        options.push(key, convert_elements(option.value)?);
    }
    Ok(options)
}

fn require<T>(
    value: Option<T>,
    element: &'static str,
    field: &'static str,
) -> Result<T, AstError> {
    value.ok_or(AstError::MissingField { element, field })
}
