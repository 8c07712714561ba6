#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod ast;
mod escape;
mod printer;
mod style;

pub use ast::{
    ArgStyle, DateTimeSkeleton, FormatArg, Node, NumberSkeleton, OptionList, PluralElement,
    PluralKind, SelectElement, SelectorOption, SkeletonToken, TagElement,
};
pub use escape::escape_literal;
pub use printer::print_message;
pub use style::{render_skeleton_token, render_style};
