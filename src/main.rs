use country_lookup::{
    get_country_lookup,
    service::var_service::Config,
    util::log_service::set_logging,
    Alpha2Resolver, HttpFetcher, ReferenceTable,
};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    set_logging()?;

    let config = Config::from_env()?;
    tracing::info!("Fetching country data from {}", config.api_url);

    let fetcher = HttpFetcher::new(config.api_url, config.timeout)?;
    let resolver = Alpha2Resolver::new(ReferenceTable::iso3166(), config.match_mode);
    let response = get_country_lookup(&fetcher, &resolver).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
