use country_lookup::{
    get_country_lookup, Alpha2Resolver, CountryError, HttpFetcher, MatchMode, ReferenceTable,
};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetcher_for(server: &MockServer, route: &str) -> HttpFetcher {
    let url = Url::parse(&format!("{}{}", server.uri(), route)).unwrap();
    HttpFetcher::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_lookup_from_country_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Argentina", "capital": "Buenos Aires"},
            {"name": "Belize", "capital": "Belmopan"},
            {"name": "Bolivia (Plurinational State of)", "capital": "Sucre"},
            {"name": "Unknownland", "capital": "Nowhere"},
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/v2/all").await;
    let response = get_country_lookup(&fetcher, &Alpha2Resolver::default())
        .await
        .unwrap();

    assert_eq!(response.record_count, 4);
    assert_eq!(response.lookup.get("Argentina").unwrap(), "AR");
    assert_eq!(response.lookup.get("Belize").unwrap(), "BZ");
    assert_eq!(response.lookup.get("Bolivia (Plurinational State of)").unwrap(), "BO");
    assert_eq!(response.unresolved, vec!["Unknownland"]);
    assert_eq!(
        response.source.as_ref().map(|u| u.path()),
        Some("/v2/all")
    );
}

#[tokio::test]
async fn test_lookup_with_wrapped_payload_and_normalized_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base": "EUR",
            "date": "2020-05-04",
            "countries": [{"name": "argentina"}, {"name": "COTE D'IVOIRE"}],
        })))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/latest").await;
    let resolver = Alpha2Resolver::new(ReferenceTable::iso3166(), MatchMode::Normalized);
    let response = get_country_lookup(&fetcher, &resolver).await.unwrap();

    assert_eq!(response.lookup.get("argentina").unwrap(), "AR");
    assert_eq!(response.lookup.get("COTE D'IVOIRE").unwrap(), "CI");
    assert!(response.unresolved.is_empty());
    assert_eq!(response.metadata["base"], "EUR");
}

#[tokio::test]
async fn test_server_error_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/all"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/v2/all").await;
    let result = get_country_lookup(&fetcher, &Alpha2Resolver::default()).await;

    let err = result.unwrap_err();
    assert!(err.is_transport_failure());
    assert!(matches!(
        err,
        CountryError::HttpStatus { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE
    ));
}

#[tokio::test]
async fn test_non_json_body_is_invalid_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/v2/all").await;
    let result = get_country_lookup(&fetcher, &Alpha2Resolver::default()).await;

    assert!(matches!(result, Err(CountryError::InvalidPayload(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    let url = Url::parse("http://127.0.0.1:1/v2/all").unwrap();
    let fetcher = HttpFetcher::new(url, Duration::from_secs(5)).unwrap();

    let result = get_country_lookup(&fetcher, &Alpha2Resolver::default()).await;

    assert!(matches!(result, Err(CountryError::Transport(_))));
}

#[tokio::test]
async fn test_fetcher_with_shared_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/all"))
        .and(header("x-client", "country-lookup-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "Chile"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-client", "country-lookup-tests".parse().unwrap());
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();
    let url = Url::parse(&format!("{}/v2/all", mock_server.uri())).unwrap();
    let fetcher = HttpFetcher::with_client(client, url);

    let response = get_country_lookup(&fetcher, &Alpha2Resolver::default())
        .await
        .unwrap();

    assert_eq!(response.lookup.get("Chile").unwrap(), "CL");
}

#[tokio::test]
async fn test_record_without_name_fails_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Argentina"},
            {"capital": "Belmopan"},
        ])))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/v2/all").await;
    let result = get_country_lookup(&fetcher, &Alpha2Resolver::default()).await;

    assert!(matches!(result, Err(CountryError::MalformedRecord { index: 1 })));
}
