pub mod agent;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod id;
pub mod model;
pub mod pages;
pub mod score;

pub use agent::Data18Agent;
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use model::{
    Actor, Artwork, Details, MediaQuery, MetadataSearchResult, MovieMetadata, Role,
    SearchResultEntry,
};
pub use pages::{DetailsPage, SearchPage, SearchResult};

/// Search the catalog for `title` using configuration from `data18.toml`
/// and the environment.
///
/// # Example
/// ```no_run
/// # async fn run() -> data18_agent::Result<()> {
/// let results = data18_agent::search("Some Movie").await?;
/// for result in results {
///     println!("{} {} {}", result.score, result.id, result.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(title: &str) -> Result<Vec<MetadataSearchResult>> {
    let agent = Data18Agent::new(ScraperConfig::load()?)?;
    agent.search(&MediaQuery::new(title)).await
}

/// Fetch the metadata record for an identifier returned by [`search`].
pub async fn update(id: &str) -> Result<MovieMetadata> {
    let agent = Data18Agent::new(ScraperConfig::load()?)?;
    agent.update(id).await
}
