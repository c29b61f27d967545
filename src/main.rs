use data18_agent::{Data18Agent, MediaQuery, ScrapeError, ScraperConfig};
use log::error;
use std::env;

const USAGE: &str = "Usage:\n  data18-agent search <title...>\n  data18-agent update <id>";

#[tokio::main]
async fn main() -> Result<(), ScrapeError> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| ScrapeError::UsageError(USAGE.to_string()))?;

    let agent = Data18Agent::new(ScraperConfig::load()?)?;

    let output = match command.as_str() {
        "search" if !rest.is_empty() => {
            let query = MediaQuery::new(rest.join(" "));
            serde_json::to_string_pretty(&agent.search(&query).await?)?
        }
        "update" if rest.len() == 1 => serde_json::to_string_pretty(&agent.update(&rest[0]).await?)?,
        _ => {
            error!("Unknown command line: {:?}", args);
            return Err(ScrapeError::UsageError(USAGE.to_string()));
        }
    };

    println!("{}", output);
    Ok(())
}
