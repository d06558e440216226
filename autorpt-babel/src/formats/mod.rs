//! Format implementations
//!
//! Each output format turns the assembled [`Document`](crate::ir::nodes::Document)
//! into text. The markdown module also hosts the source block parser.

pub mod html;
pub mod json;
pub mod markdown;
pub mod outline;

pub use html::{HtmlFormat, HtmlOptions, HtmlTheme};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use outline::OutlineFormat;
