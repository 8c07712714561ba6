use alloc::string::String;

use crate::ast::{ArgStyle, SkeletonToken};
use crate::escape::escape_literal;

pub fn render_style(style: &ArgStyle) -> String {
    match style {
        ArgStyle::Text(text) => escape_literal(text, false),
        ArgStyle::Number(skeleton) => {
            let mut out = String::from("::");
            for (idx, token) in skeleton.tokens.iter().enumerate() {
                if idx > 0 {
                    out.push(' ');
                }
                out.push_str(&render_skeleton_token(token));
            }
            out
        }
        ArgStyle::DateTime(skeleton) => {
            let mut out = String::from("::");
            out.push_str(&skeleton.pattern);
            out
        }
    }
}

pub fn render_skeleton_token(token: &SkeletonToken) -> String {
    let mut out = token.stem.clone();
    for option in &token.options {
        out.push('/');
        out.push_str(option);
    }
    out
}
