use super::selector;
use crate::error::{Result, ScrapeError};
use crate::model::SearchResultEntry;
use scraper::{ElementRef, Html};

/// The search results page
pub struct SearchPage {
    document: Html,
}

impl SearchPage {
    pub fn new(document: Html) -> Self {
        Self { document }
    }

    pub fn parse(html: &str) -> Self {
        Self::new(Html::parse_document(html))
    }

    /// One result per card whose class is exactly `grid-item`, in document order
    pub fn search_results(&self) -> Result<Vec<SearchResult<'_>>> {
        let cards = selector(r#"div[class="grid-item"]"#)?;
        Ok(self.document.select(&cards).map(SearchResult::new).collect())
    }
}

/// A single result card
pub struct SearchResult<'a> {
    card: ElementRef<'a>,
}

impl<'a> SearchResult<'a> {
    pub fn new(card: ElementRef<'a>) -> Self {
        Self { card }
    }

    fn first_attr(&self, attr: &str) -> Result<String> {
        let with_attr = selector(&format!("[{attr}]"))?;
        self.card
            .select(&with_attr)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
            .ok_or_else(|| ScrapeError::missing(format!("{attr} attribute in search result")))
    }

    pub fn title(&self) -> Result<String> {
        self.first_attr("title")
    }

    /// Relative path to the details page
    pub fn details_path(&self) -> Result<String> {
        self.first_attr("href")
    }

    pub fn entry(&self) -> Result<SearchResultEntry> {
        Ok(SearchResultEntry {
            title: self.title()?,
            details_path: self.details_path()?,
        })
    }
}
