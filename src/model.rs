use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// One catalog item reference taken from a search result card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultEntry {
    pub title: String,
    /// Relative URL of the details page, `/`-delimited
    pub details_path: String,
}

/// A performer credited on a details page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    /// `None` when the performer image has no `title` attribute
    pub name: Option<String>,
    pub photo_url: String,
}

/// Every field extracted from one details page
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub title: String,
    pub tagline: Option<String>,
    pub synopsis: Option<String>,
    pub categories: Vec<String>,
    pub studio: String,
    pub director: String,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<Duration>,
    pub background_url: Option<String>,
    pub cover_url: String,
    pub actors: Vec<Actor>,
}

/// What the host knows about the media being matched
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    pub name: String,
    pub year: Option<i32>,
    /// Title from a primary metadata agent, preferred over `name` when present
    pub primary_title: Option<String>,
    pub primary_year: Option<i32>,
}

impl MediaQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        self.primary_title.as_deref().unwrap_or(&self.name)
    }

    pub fn year(&self) -> Option<i32> {
        if self.primary_title.is_some() {
            self.primary_year
        } else {
            self.year
        }
    }
}

/// A ranked candidate handed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataSearchResult {
    /// Opaque identifier, see [`crate::id`]
    pub id: String,
    pub name: String,
    pub score: i32,
    pub lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub name: Option<String>,
    pub photo: String,
}

/// Downloaded artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub url: String,
    pub sort_order: u32,
    pub size: usize,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Artwork {
    pub fn new(url: impl Into<String>, sort_order: u32, bytes: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            sort_order,
            size: bytes.len(),
            bytes,
        }
    }
}

/// The metadata record populated by an update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieMetadata {
    pub id: String,
    pub title: String,
    pub studio: String,
    pub content_rating: String,
    pub content_rating_age: u32,
    pub originally_available_at: Option<NaiveDate>,
    pub year: Option<i32>,
    pub duration_ms: Option<i64>,
    pub tagline: Option<String>,
    pub summary: Option<String>,
    pub directors: Vec<String>,
    pub roles: Vec<Role>,
    pub genres: Vec<String>,
    pub posters: Vec<Artwork>,
    pub art: Vec<Artwork>,
}
