use crate::config::ScraperConfig;
use crate::error::Result;
use crate::fetchers::{PageFetcher, RequestFetcher};
use crate::id;
use crate::model::{Artwork, Details, MediaQuery, MetadataSearchResult, MovieMetadata, Role};
use crate::pages::{DetailsPage, SearchPage};
use crate::score::title_score;
use chrono::Datelike;
use log::{debug, info, warn};

const CONTENT_RATING: &str = "NC-17";
const CONTENT_RATING_AGE: u32 = 18;
const BASE_GENRE: &str = "Porn";
const MILLISECONDS_PER_SECOND: i64 = 1000;

/// Searches the catalog and fills metadata records from details pages
pub struct Data18Agent {
    config: ScraperConfig,
    fetcher: Box<dyn PageFetcher>,
}

impl Data18Agent {
    /// Create an agent fetching over HTTP
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let fetcher = RequestFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Box::new(fetcher)))
    }

    pub fn with_fetcher(config: ScraperConfig, fetcher: Box<dyn PageFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Candidates for `query`, best match first
    pub async fn search(&self, query: &MediaQuery) -> Result<Vec<MetadataSearchResult>> {
        let title = query.title();
        info!("Searching for {:?} (year {:?})", title, query.year());

        let url = self
            .config
            .url_for(&format!("Search?q={}", urlencoding::encode(title)));
        let html = self.fetcher.fetch_html(&url).await?;

        let results = rank_search_results(&html, title, &self.config.language)?;
        debug!("{} candidates for {:?}", results.len(), title);
        Ok(results)
    }

    /// Build the metadata record for an identifier returned by [`Self::search`]
    pub async fn update(&self, id: &str) -> Result<MovieMetadata> {
        let url = self.config.url_for(&id::id_to_path(id));
        info!("Updating {} from {}", id, url);

        let html = self.fetcher.fetch_html(&url).await?;
        let details = DetailsPage::parse(&html).details()?;

        let mut metadata = metadata_from_details(id, &details);

        debug!("Poster URL: {}", details.cover_url);
        let poster = self
            .fetcher
            .fetch_bytes(&details.cover_url, &self.config.image_referer)
            .await?;
        metadata.posters.push(Artwork::new(&details.cover_url, 1, poster));

        if let Some(background_url) = &details.background_url {
            debug!("Background URL: {}", background_url);
            let art = self
                .fetcher
                .fetch_bytes(background_url, &self.config.image_referer)
                .await?;
            metadata.art.push(Artwork::new(background_url, 1, art));
        }

        Ok(metadata)
    }
}

/// Score every card on a search page against `title`, highest score first.
/// Cards missing a title or link are skipped.
fn rank_search_results(html: &str, title: &str, lang: &str) -> Result<Vec<MetadataSearchResult>> {
    let page = SearchPage::parse(html);
    let mut results = Vec::new();

    for result in page.search_results()? {
        let entry = match result.entry() {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping search result: {}", e);
                continue;
            }
        };
        let score = title_score(title, &entry.title);
        debug!("{:?} -> {} (score {})", entry.title, entry.details_path, score);
        results.push(MetadataSearchResult {
            id: id::path_to_id(&entry.details_path),
            name: entry.title,
            score,
            lang: lang.to_string(),
        });
    }

    results.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(results)
}

fn metadata_from_details(id: &str, details: &Details) -> MovieMetadata {
    let mut genres = vec![BASE_GENRE.to_string()];
    genres.extend(details.categories.iter().cloned());

    MovieMetadata {
        id: id.to_string(),
        title: details.title.clone(),
        studio: details.studio.clone(),
        content_rating: CONTENT_RATING.to_string(),
        content_rating_age: CONTENT_RATING_AGE,
        originally_available_at: details.release_date,
        year: details.release_date.map(|date| date.year()),
        duration_ms: details
            .runtime
            .map(|runtime| runtime.num_seconds() * MILLISECONDS_PER_SECOND),
        tagline: details.tagline.clone(),
        summary: details.synopsis.clone(),
        directors: vec![details.director.clone()],
        roles: details
            .actors
            .iter()
            .map(|actor| Role {
                name: actor.name.clone(),
                photo: actor.photo_url.clone(),
            })
            .collect(),
        genres,
        posters: Vec::new(),
        art: Vec::new(),
    }
}
