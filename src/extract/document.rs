//! Thin layer over `scraper` for the queries the extractors need
//!
//! `scraper::Html` is not `Send`. Callers parse, extract and drop the document
//! inside synchronous code, never across an `.await`.

use crate::TabellError;
use scraper::{ElementRef, Html, Selector};

/// Parses a full upstream page
pub fn parse_html(html: &str) -> Html {
    Html::parse_document(html)
}

/// Re-parses the inner markup of a table row as its own document
///
/// HTML fragment parsing happens in `<body>` context, where bare `<td>` tags
/// are dropped. The cells are therefore put back into a synthetic
/// `<table><tbody><tr>` so they keep their elements and classes.
pub fn reparse_row(row: ElementRef<'_>) -> Html {
    Html::parse_fragment(&format!(
        "<table><tbody><tr>{}</tr></tbody></table>",
        row.inner_html()
    ))
}

/// Compiles a CSS selector, mapping failures into [`TabellError::Selector`]
pub fn parse_selector(selector: &str) -> Result<Selector, TabellError> {
    Selector::parse(selector).map_err(|e| TabellError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Direct child elements of `element`, in document order
pub fn child_elements<'a>(element: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// All descendant text of `element` concatenated, untouched
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Removes every tab and newline, wherever it occurs in the string
pub fn strip_tabs_and_newlines(text: &str) -> String {
    text.chars().filter(|c| *c != '\t' && *c != '\n').collect()
}
