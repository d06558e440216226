//! Inline markup stripping
//!
//! Emphasis and code spans are not converted into rich-text runs. Their
//! delimiters are removed and the inner text is kept, in this order: bold,
//! italic, code. Bold goes first so `**x**` is not read as two empty italics.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Remove `**bold**`, `*italic*` and `` `code` `` delimiters, keeping the text.
pub fn strip_inline_markup(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    CODE.replace_all(&text, "$1").into_owned()
}
