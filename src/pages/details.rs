use super::{direct_text, element_text, extract_img_url, find_css_url, selector};
use crate::error::{Result, ScrapeError};
use crate::model::{Actor, Details};
use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

const RELEASE_DATE_FORMAT: &str = "%b %d, %Y";

static HOURS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) hrs\.").expect("valid hours pattern"));
static MINUTES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) mins\.").expect("valid minutes pattern"));

/// The details page of a single video
pub struct DetailsPage {
    document: Html,
}

impl DetailsPage {
    pub fn new(document: Html) -> Self {
        Self { document }
    }

    pub fn parse(html: &str) -> Self {
        Self::new(Html::parse_document(html))
    }

    fn first(&self, css: &str) -> Result<Option<ElementRef<'_>>> {
        Ok(self.document.select(&selector(css)?).next())
    }

    fn required(&self, css: &str) -> Result<ElementRef<'_>> {
        self.first(css)?
            .ok_or_else(|| ScrapeError::missing(css.to_string()))
    }

    /// Capitalize each space-separated word, lowercasing the rest of it.
    pub fn capitalize(line: &str) -> String {
        line.split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The release date and the runtime are both rendered as
    /// `div.release-date > span` with the value in the text after the span.
    /// Only the label inside the span ("Released" or "Length") tells them apart.
    /// The label is the span's own leading text, nested elements are ignored.
    fn labelled_release_span(&self, label: &str) -> Result<Option<ElementRef<'_>>> {
        let spans = selector(r#"div[class="release-date"] > span"#)?;
        Ok(self
            .document
            .select(&spans)
            .find(|span| direct_text(*span).contains(label)))
    }

    /// Text following a labelled release span, trimmed
    fn labelled_value(&self, label: &str) -> Result<Option<String>> {
        let Some(span) = self.labelled_release_span(label)? else {
            return Ok(None);
        };
        let tail = span
            .next_sibling()
            .and_then(|node| node.value().as_text().map(|text| text.trim().to_string()))
            .ok_or_else(|| ScrapeError::missing(format!("value after {label:?} label")))?;
        Ok(Some(tail))
    }

    /// Leading text of the heading; badges nested after it are not part of the title.
    pub fn title(&self) -> Result<String> {
        let heading = self.required(r#"div[class*="video-title"] > h1"#)?;
        Ok(direct_text(heading).trim().to_string())
    }

    pub fn tagline(&self) -> Result<Option<String>> {
        Ok(self.first(r#"[class="tag-line"]"#)?.map(element_text))
    }

    /// The synopsis wraps individual words in styling elements, so every
    /// text node below the paragraph is collected.
    pub fn synopsis(&self) -> Result<Option<String>> {
        Ok(self
            .first(r#"div[class="synopsis"] > p"#)?
            .map(element_text))
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        let links = selector(r#"div[class="categories"] > a"#)?;
        Ok(self
            .document
            .select(&links)
            .map(|a| Self::capitalize(&element_text(a)))
            .collect())
    }

    pub fn studio(&self) -> Result<String> {
        Ok(element_text(self.required(r#"a[data-label="Studio"]"#)?))
    }

    pub fn director(&self) -> Result<String> {
        Ok(element_text(self.required(r#"a[data-label="Director"]"#)?))
    }

    pub fn release_date(&self) -> Result<Option<NaiveDate>> {
        let Some(text) = self.labelled_value("Released")? else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(&text, RELEASE_DATE_FORMAT)
            .map(Some)
            .map_err(|source| ScrapeError::DateParseError { text, source })
    }

    pub fn release_year(&self) -> Result<Option<i32>> {
        Ok(self.release_date()?.map(|date| date.year()))
    }

    /// Runtime from text such as `1 hrs. 35 mins.`; a missing unit counts as zero.
    pub fn runtime(&self) -> Result<Option<Duration>> {
        let Some(text) = self.labelled_value("Length")? else {
            return Ok(None);
        };
        let out_of_range = || ScrapeError::RuntimeParseError { text: text.clone() };
        let count = |pattern: &Regex| -> Result<i64> {
            match pattern.captures(&text) {
                Some(caps) => caps[1].parse().map_err(|_| out_of_range()),
                None => Ok(0),
            }
        };
        let hours = count(&HOURS_PATTERN)?;
        let minutes = count(&MINUTES_PATTERN)?;
        debug!("Runtime {:?}: {} hours {} minutes", text, hours, minutes);

        let total = hours
            .checked_mul(60)
            .and_then(|hour_minutes| hour_minutes.checked_add(minutes))
            .ok_or_else(out_of_range)?;
        Duration::try_minutes(total).map(Some).ok_or_else(out_of_range)
    }

    pub fn background_url(&self) -> Result<Option<String>> {
        Ok(self
            .first("style")?
            .and_then(|style| find_css_url(&style.text().collect::<String>())))
    }

    pub fn cover_url(&self) -> Result<String> {
        let source = self.required(r#"a[class="boxcover"] source"#)?;
        source
            .value()
            .attr("srcset")
            .map(str::to_string)
            .ok_or_else(|| ScrapeError::missing("srcset on boxcover source"))
    }

    pub fn actors(&self) -> Result<Vec<Actor>> {
        let images = selector(r#"div[class="video-performer"] img"#)?;
        self.document
            .select(&images)
            .map(|img| {
                Ok(Actor {
                    name: img.value().attr("title").map(str::to_string),
                    photo_url: extract_img_url(img)?,
                })
            })
            .collect()
    }

    /// Every field of the page in one record
    pub fn details(&self) -> Result<Details> {
        Ok(Details {
            title: self.title()?,
            tagline: self.tagline()?,
            synopsis: self.synopsis()?,
            categories: self.categories()?,
            studio: self.studio()?,
            director: self.director()?,
            release_date: self.release_date()?,
            runtime: self.runtime()?,
            background_url: self.background_url()?,
            cover_url: self.cover_url()?,
            actors: self.actors()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(DetailsPage::capitalize("HARD CORE"), "Hard Core");
        assert_eq!(DetailsPage::capitalize("milf"), "Milf");
        assert_eq!(DetailsPage::capitalize("big  gap"), "Big  Gap");
        assert_eq!(DetailsPage::capitalize(""), "");
    }

    #[test]
    fn test_label_without_value() {
        let page = DetailsPage::parse(
            r#"<div class="release-date"><span>Released:</span><b>soon</b></div>"#,
        );
        assert!(matches!(
            page.release_date(),
            Err(ScrapeError::MissingElement(_))
        ));
    }

    #[test]
    fn test_unparsable_release_date() {
        let page = DetailsPage::parse(
            r#"<div class="release-date"><span>Released:</span> 2019-01-05</div>"#,
        );
        match page.release_date() {
            Err(ScrapeError::DateParseError { text, .. }) => assert_eq!(text, "2019-01-05"),
            other => panic!("expected date parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_runtime_hours_only() {
        let page =
            DetailsPage::parse(r#"<div class="release-date"><span>Length:</span> 2 hrs.</div>"#);
        assert_eq!(page.runtime().unwrap(), Some(Duration::minutes(120)));
    }

    #[test]
    fn test_background_url_without_match() {
        let page = DetailsPage::parse("<style>body { color: red; }</style>");
        assert_eq!(page.background_url().unwrap(), None);
        let page = DetailsPage::parse("<p>no style</p>");
        assert_eq!(page.background_url().unwrap(), None);
    }
}
