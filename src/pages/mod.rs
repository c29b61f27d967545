//! Page models for the catalog's search results and details pages.

use crate::error::{Result, ScrapeError};
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

mod details;
mod search;

pub use details::DetailsPage;
pub use search::{SearchPage, SearchResult};

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\(([^)]+)\)").expect("valid url pattern"));

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::SelectorError(format!("{css}: {e:?}")))
}

/// All text fragments below `element`, in document order, trimmed.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text before the element's first child element, untrimmed.
pub(crate) fn direct_text(element: ElementRef) -> String {
    element
        .first_child()
        .and_then(|node| node.value().as_text().map(|text| text.to_string()))
        .unwrap_or_default()
}

/// First `url(...)` capture in a CSS snippet.
pub(crate) fn find_css_url(css: &str) -> Option<String> {
    URL_PATTERN
        .captures(css)
        .map(|caps| caps[1].to_string())
}

/// URL of the `background-image` declaration in an element's inline style.
pub(crate) fn extract_img_url(element: ElementRef) -> Result<String> {
    let style = element
        .value()
        .attr("style")
        .ok_or_else(|| ScrapeError::missing("style attribute on image"))?;

    style
        .split(';')
        .map(str::trim_start)
        .find(|declaration| declaration.starts_with("background-image"))
        .and_then(find_css_url)
        .ok_or_else(|| ScrapeError::missing(format!("background-image url in {style:?}")))
}
