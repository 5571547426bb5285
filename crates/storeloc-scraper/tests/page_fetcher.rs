//! Integration tests for `PageFetcher::fetch`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storeloc_scraper::{extract_store, PageFetcher, ScraperError};

fn test_fetcher() -> PageFetcher {
    PageFetcher::new(5, None).expect("failed to build test PageFetcher")
}

#[tokio::test]
async fn fetch_returns_body_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store/kotara/1234"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<h4 class="store-heading">Target – Kotara</h4>"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/store/kotara/1234", server.uri());
    let html = test_fetcher().fetch(&url).await.expect("expected Ok");

    let record = extract_store(&html, &url).expect("expected a record");
    assert_eq!(record.public_name, "Kotara");
    assert_eq!(record.location_id.as_deref(), Some("1234"));
}

#[tokio::test]
async fn fetch_decodes_invalid_utf8_lossily() {
    let server = MockServer::start().await;

    let mut body = b"<p>Caf".to_vec();
    body.extend_from_slice(&[0xe9, 0xff]);
    body.extend_from_slice(b" open</p>");

    Mock::given(method("GET"))
        .and(path("/store/1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let html = test_fetcher()
        .fetch(&format!("{}/store/1", server.uri()))
        .await
        .expect("lossy decode should not fail");

    assert!(html.starts_with("<p>Caf"));
    assert!(html.ends_with(" open</p>"));
    assert!(html.contains('\u{FFFD}'));
}

#[tokio::test]
async fn fetch_returns_unexpected_status_on_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store/gone/9"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/store/gone/9", server.uri());
    let err = test_fetcher().fetch(&url).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 404, url: ref u } if *u == url),
        "expected UnexpectedStatus(404), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_does_not_retry_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_fetcher().fetch(&format!("{}/store/1", server.uri())).await;
    assert!(matches!(
        result,
        Err(ScraperError::UnexpectedStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn fetch_times_out_on_slow_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("too late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(1, None).unwrap();
    let err = fetcher
        .fetch(&format!("{}/store/1", server.uri()))
        .await
        .unwrap_err();

    match err {
        ScraperError::Http(e) => assert!(e.is_timeout(), "expected timeout, got: {e:?}"),
        other => panic!("expected Http timeout, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_sends_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "storeloc-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(5, Some("storeloc-test/0.1")).unwrap();
    let body = fetcher.fetch(&format!("{}/", server.uri())).await.unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn fetch_reports_connection_failure_as_http_error() {
    // Port 1 is reserved and not listening.
    let err = test_fetcher()
        .fetch("http://127.0.0.1:1/store/1")
        .await
        .unwrap_err();
    assert!(matches!(err, ScraperError::Http(_)), "got: {err:?}");
}
