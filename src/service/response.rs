use crate::{
    country::{
        lookup::{build_lookup_from_records, CountryLookupTable},
        record::records_from_payload,
    },
    fetch::http::DataFetcher,
    prelude::*,
    region::resolver::Alpha2Resolver,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

/// What the UI layer gets back from one lookup request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryResponse {
    pub lookup: CountryLookupTable,
    pub unresolved: Vec<String>,
    pub record_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Url>,
    pub fetched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

/// Builds the response from a finished fetch. A failed fetch is handed back untouched.
pub fn assemble_response(
    fetched: Result<Value>,
    resolver: &Alpha2Resolver,
    source: Option<&Url>,
) -> Result<CountryResponse> {
    let payload = records_from_payload(fetched?)?;
    let outcome = build_lookup_from_records(&payload.records, resolver)?;

    Ok(CountryResponse {
        lookup: outcome.table,
        unresolved: outcome.unresolved,
        record_count: payload.records.len(),
        source: source.cloned(),
        fetched_at: Utc::now(),
        metadata: payload.metadata,
    })
}

pub async fn get_country_lookup<F: DataFetcher>(
    fetcher: &F,
    resolver: &Alpha2Resolver<'_>,
) -> Result<CountryResponse> {
    let fetched = fetcher.fetch().await;
    let response = assemble_response(fetched, resolver, fetcher.source())?;
    tracing::info!(
        "Resolved {} of {} country records",
        response.lookup.len(),
        response.record_count
    );

    Ok(response)
}
