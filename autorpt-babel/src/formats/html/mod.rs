//! HTML format implementation
//!
//! Exports the assembled document as a single self-contained HTML5 page.
//!
//! # Library Choice
//!
//! The page body is built as an `markup5ever_rcdom` tree and written by
//! `html5ever`'s serializer, so text escaping and attribute quoting follow the
//! HTML5 rules rather than ad hoc string building.
//!
//! # Element Mapping Table
//!
//! | Document node | HTML                                                   |
//! |---------------|--------------------------------------------------------|
//! | Document      | `<div class="report-document">`                        |
//! | Title         | `<h1 class="report-title">` and the page `<title>`     |
//! | Heading       | `<hN class="report-heading" data-level="D">`, N = min(D, 6) |
//! | Paragraph     | `<p class="report-paragraph">`                         |
//! | List          | `<ul>`/`<ol>` with `class="report-list"`               |
//! | ListItem      | `<li class="report-list-item">`                        |
//! | Table         | `<table class="report-table">` with `thead`/`tbody`    |
//! | Bold / Italic | `<strong>` / `<em>`                                    |
//!
//! Cell alignment is written as an inline `text-align` style.
//!
//! # CSS and Theming
//!
//! `css/baseline.css` is always embedded. A theme stylesheet is layered on
//! top: `modern` (sans-serif, the default) or `serif`. The theme is chosen
//! with the `theme` option.

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use log::warn;
use std::collections::HashMap;

pub use serializer::{serialize_to_html, serialize_to_html_with_options, HtmlOptions};

/// Format implementation for HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat {
    /// CSS theme to use for export
    theme: HtmlTheme,
}

/// Available CSS themes for HTML export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HtmlTheme {
    /// Sans-serif typography
    #[default]
    Modern,
    /// Book-like serif typography
    Serif,
}

impl HtmlTheme {
    /// Parse a theme name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "modern" | "default" => Some(HtmlTheme::Modern),
            "serif" | "fancy-serif" => Some(HtmlTheme::Serif),
            _ => None,
        }
    }
}

impl HtmlFormat {
    /// Create a new HTML format with the specified theme
    pub fn new(theme: HtmlTheme) -> Self {
        Self { theme }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_html(doc, self.theme)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut html_options = HtmlOptions::new(self.theme);
        for (key, value) in options {
            match key.as_str() {
                "theme" => match HtmlTheme::from_name(value) {
                    Some(theme) => html_options.theme = theme,
                    None => warn!("Unknown HTML theme '{value}', using {:?}", self.theme),
                },
                "custom_css" => html_options = html_options.with_custom_css(value.clone()),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "HTML format has no option '{other}'"
                    )))
                }
            }
        }
        serialize_to_html_with_options(doc, html_options)
    }
}
