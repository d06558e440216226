//! HTML serialization (Document → HTML export)
//!
//! Converts the assembled document to semantic HTML5 with embedded CSS.
//! Pipeline: IR nodes → RcDom → HTML string

use crate::error::FormatError;
use crate::formats::html::HtmlTheme;
use crate::ir::nodes::{DocNode, Document, InlineContent, Table, TableCell, TableCellAlignment};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// CSS theme to use
    pub theme: HtmlTheme,
    /// Optional custom CSS to append after the baseline and theme CSS
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Serialize a document to HTML with the given theme
pub fn serialize_to_html(doc: &Document, theme: HtmlTheme) -> Result<String, FormatError> {
    serialize_to_html_with_options(doc, HtmlOptions::new(theme))
}

/// Serialize a document to HTML with full options
pub fn serialize_to_html_with_options(
    doc: &Document,
    options: HtmlOptions,
) -> Result<String, FormatError> {
    let title = doc.title.as_deref().unwrap_or("Report");
    let container = build_html_dom(doc);
    let body_html = serialize_children(&container)?;
    Ok(wrap_in_document(&body_html, title, &options))
}

/// Build the document container with one child element per node
fn build_html_dom(doc: &Document) -> Handle {
    let container = create_element("div", vec![("class", "report-document")]);

    if let Some(title) = &doc.title {
        let heading = create_element("h1", vec![("class", "report-title")]);
        append(&heading, create_text(title));
        append(&container, heading);
    }

    for node in &doc.children {
        let element = match node {
            DocNode::Heading(heading) => {
                // HTML stops at h6; the real depth is kept in data-level
                let tag = format!("h{}", heading.level.clamp(1, 6));
                let level = heading.level.to_string();
                let element = create_element(
                    &tag,
                    vec![("class", "report-heading"), ("data-level", level.as_str())],
                );
                add_inlines(&element, &heading.content);
                element
            }

            DocNode::Paragraph(paragraph) => {
                let element = create_element("p", vec![("class", "report-paragraph")]);
                add_inlines(&element, &paragraph.content);
                element
            }

            DocNode::List(list) => {
                let tag = if list.ordered { "ol" } else { "ul" };
                let element = create_element(tag, vec![("class", "report-list")]);
                for item in &list.items {
                    let li = create_element("li", vec![("class", "report-list-item")]);
                    add_inlines(&li, &item.content);
                    append(&element, li);
                }
                element
            }

            DocNode::Table(table) => build_table(table),
        };
        append(&container, element);
    }

    container
}

fn build_table(table: &Table) -> Handle {
    let element = create_element("table", vec![("class", "report-table")]);

    let header = table.header();
    if !header.is_empty() {
        let thead = create_element("thead", vec![]);
        for row in header {
            let tr = create_element("tr", vec![]);
            for cell in &row.cells {
                append(&tr, build_cell("th", cell));
            }
            append(&thead, tr);
        }
        append(&element, thead);
    }

    let tbody = create_element("tbody", vec![]);
    for row in table.body() {
        let tr = create_element("tr", vec![]);
        for cell in &row.cells {
            append(&tr, build_cell("td", cell));
        }
        append(&tbody, tr);
    }
    append(&element, tbody);

    element
}

fn build_cell(tag: &str, cell: &TableCell) -> Handle {
    let mut attrs = vec![];
    match cell.align {
        TableCellAlignment::Left => attrs.push(("style", "text-align: left")),
        TableCellAlignment::Right => attrs.push(("style", "text-align: right")),
        TableCellAlignment::Center => attrs.push(("style", "text-align: center")),
        TableCellAlignment::None => {}
    }
    let element = create_element(tag, attrs);

    // th is bold already
    if cell.bold && tag != "th" {
        let strong = create_element("strong", vec![]);
        append(&strong, create_text(&cell.text));
        append(&element, strong);
    } else if !cell.text.is_empty() {
        append(&element, create_text(&cell.text));
    }
    element
}

fn add_inlines(parent: &Handle, content: &[InlineContent]) {
    for inline in content {
        add_inline_to_node(parent, inline);
    }
}

/// Add inline content to an element
fn add_inline_to_node(parent: &Handle, inline: &InlineContent) {
    match inline {
        InlineContent::Text(text) => append(parent, create_text(text)),
        InlineContent::Bold(children) => {
            let strong = create_element("strong", vec![]);
            add_inlines(&strong, children);
            append(parent, strong);
        }
        InlineContent::Italic(children) => {
            let em = create_element("em", vec![]);
            add_inlines(&em, children);
            append(parent, em);
        }
    }
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the container's children (the container itself is written by
/// the page template)
fn serialize_children(container: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
        output.push(b'\n');
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let baseline_css = include_str!("../../../css/baseline.css");
    let theme_css = match options.theme {
        HtmlTheme::Serif => include_str!("../../../css/themes/theme-serif.css"),
        HtmlTheme::Modern => include_str!("../../../css/themes/theme-modern.css"),
    };
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="autorpt">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{theme_css}
{custom_css}
  </style>
</head>
<body>
<div class="report-document">
{body_html}</div>
</body>
</html>
"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
