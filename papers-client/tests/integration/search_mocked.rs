//! Integration tests for ESearch identifier search using mocked HTTP responses

mod common;

use common::{create_mock_client, create_mock_client_with, esearch_json, mount_esearch};
use papers_client::{ClientConfig, PapersError};
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_search_ids_preserves_remote_order() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, "cancer", &["333", "111", "222"]).await;
    let client = create_mock_client(&mock_server);

    let pmids = client.search_ids("cancer").await.expect("search should succeed");

    assert_eq!(pmids, vec!["333", "111", "222"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_ids_sends_expected_parameters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "heart failure AND 2020[pdat]"))
        .and(query_param("retmode", "json"))
        .and(query_param("retmax", "10"))
        .and(query_param("tool", "test-client"))
        .and(query_param("email", "lab@example.org"))
        .respond_with(ResponseTemplate::new(200).set_body_json(esearch_json(&["1"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client_with(
        &mock_server,
        ClientConfig::new().with_email("lab@example.org"),
    );

    let pmids = client
        .search_ids("heart failure AND 2020[pdat]")
        .await
        .expect("search should succeed");
    assert_eq!(pmids, vec!["1"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_ids_caps_results() {
    let mock_server = MockServer::start().await;
    let many: Vec<String> = (1..=25).map(|i| i.to_string()).collect();
    let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
    mount_esearch(&mock_server, "covid", &many_refs).await;
    let client = create_mock_client(&mock_server);

    let pmids = client.search_ids("covid").await.unwrap();

    assert_eq!(pmids.len(), 10);
    assert_eq!(pmids, many[..10].to_vec());
}

#[tokio::test]
#[traced_test]
async fn test_search_ids_custom_result_cap() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retmax", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(esearch_json(&["1", "2", "3"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client_with(&mock_server, ClientConfig::new().with_max_results(3));

    assert_eq!(client.search_ids("asthma").await.unwrap().len(), 3);
}

#[tokio::test]
#[traced_test]
async fn test_search_ids_server_error_is_fatal_without_retry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    let client = create_mock_client(&mock_server);

    let err = client.search_ids("cancer").await.unwrap_err();

    match err {
        PapersError::ApiError { status, .. } => assert_eq!(status, 500),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_search_ids_missing_idlist_is_shape_mismatch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "esearchresult": { "count": "0" } })),
        )
        .mount(&mock_server)
        .await;
    let client = create_mock_client(&mock_server);

    let err = client.search_ids("cancer").await.unwrap_err();

    assert!(matches!(err, PapersError::UnexpectedResponse { .. }));
}

#[tokio::test]
#[traced_test]
async fn test_search_ids_blank_query_makes_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    let client = create_mock_client(&mock_server);

    let err = client.search_ids("  ").await.unwrap_err();

    assert!(matches!(err, PapersError::InvalidQuery(_)));
}
