use alloc::format;
use alloc::string::String;

use crate::ast::{FormatArg, Node, OptionList};
use crate::escape::escape_literal;
use crate::style::render_style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SelectorKind {
    Plural,
    Select,
}

impl SelectorKind {
    fn opposite(self) -> Self {
        match self {
            SelectorKind::Plural => SelectorKind::Select,
            SelectorKind::Select => SelectorKind::Plural,
        }
    }

    fn opening(self) -> &'static str {
        match self {
            SelectorKind::Plural => "\n  {",
            SelectorKind::Select => "\n {",
        }
    }
}

struct Selector<'a> {
    kind: SelectorKind,
    name: &'a str,
    keyword: &'static str,
    offset: Option<u32>,
    options: &'a OptionList,
}

pub fn print_message(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes, false, None);
    String::from(out.trim())
}

fn write_nodes(
    out: &mut String,
    nodes: &[Node],
    inside_plural: bool,
    parent: Option<SelectorKind>,
) {
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(&escape_literal(text, inside_plural)),
            Node::Argument(name) => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
            Node::Number(arg) => write_format_arg(out, arg, "number"),
            Node::Date(arg) => write_format_arg(out, arg, "date"),
            Node::Time(arg) => write_format_arg(out, arg, "time"),
            Node::Pound => out.push('#'),
            Node::Tag(tag) => {
                out.push('<');
                out.push_str(&tag.name);
                out.push('>');
                write_nodes(out, &tag.children, inside_plural, parent);
                out.push_str("</");
                out.push_str(&tag.name);
                out.push('>');
            }
            Node::Select(select) => write_selector(
                out,
                &Selector {
                    kind: SelectorKind::Select,
                    name: &select.name,
                    keyword: "select",
                    offset: None,
                    options: &select.options,
                },
                parent,
            ),
            Node::Plural(plural) => write_selector(
                out,
                &Selector {
                    kind: SelectorKind::Plural,
                    name: &plural.name,
                    keyword: plural.kind.keyword(),
                    // offset:0 is the default and is not printed
                    offset: plural.offset.filter(|offset| *offset > 0),
                    options: &plural.options,
                },
                parent,
            ),
        }
    }
}

fn write_format_arg(out: &mut String, arg: &FormatArg, keyword: &str) {
    out.push('{');
    out.push_str(&arg.name);
    out.push_str(", ");
    out.push_str(keyword);
    if let Some(style) = &arg.style {
        out.push_str(", ");
        out.push_str(&render_style(style));
    }
    out.push('}');
}

fn write_selector(out: &mut String, selector: &Selector<'_>, parent: Option<SelectorKind>) {
    let indent = if parent == Some(selector.kind.opposite()) {
        "  "
    } else {
        ""
    };
    let inside_plural = selector.kind == SelectorKind::Plural;

    let mut tail = match selector.offset {
        Some(offset) => format!("offset:{offset}"),
        None => String::new(),
    };
    for option in selector.options {
        tail.push_str("\n ");
        tail.push_str(indent);
        tail.push_str(&option.key);
        tail.push_str(" {");
        write_nodes(&mut tail, &option.value, inside_plural, Some(selector.kind));
        tail.push('}');
    }

    out.push_str(selector.kind.opening());
    out.push_str(selector.name);
    out.push_str(", ");
    out.push_str(selector.keyword);
    out.push_str(if tail.starts_with('\n') { "," } else { ", " });
    out.push_str(&tail);
    out.push('}');
}
