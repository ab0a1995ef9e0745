use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 1回だけ固定レスポンスを返すローカルHTTPサーバーを起動
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}/posts", addr)
}

// =========================================================================
// parse_records tests
// =========================================================================

#[test]
fn test_parse_records_reads_titles() {
    let records = parse_records(r#"[{"id":1,"title":"first"},{"title":"second","body":"x"}]"#)
        .unwrap();

    assert_eq!(
        records,
        vec![
            RemoteRecord {
                title: Some("first".to_string())
            },
            RemoteRecord {
                title: Some("second".to_string())
            },
        ]
    );
}

#[test]
fn test_parse_records_missing_title() {
    let records = parse_records(r#"[{"id":1}, 42, {"title": 7}]"#).unwrap();

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.title.is_none()));
}

#[test]
fn test_parse_records_rejects_object() {
    let result = parse_records(r#"{"title":"x"}"#);
    assert!(matches!(result, Err(QuoteError::RemoteFormat(_))));
}

#[test]
fn test_parse_records_rejects_invalid_json() {
    let result = parse_records("<html>");
    assert!(matches!(result, Err(QuoteError::RemoteFormat(_))));
}

// =========================================================================
// HttpSource tests
// =========================================================================

#[tokio::test]
async fn test_http_source_fetches_records() {
    let url = serve_once("200 OK", r#"[{"title":"from server"}]"#).await;
    let source = HttpSource::new(url.clone(), &HttpConfig::default());

    let records = source.fetch().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title.as_deref(), Some("from server"));
    assert_eq!(source.describe(), url);
}

#[tokio::test]
async fn test_http_source_reports_status_error() {
    let url = serve_once("503 Service Unavailable", "down").await;
    let source = HttpSource::new(url, &HttpConfig::default());

    let result = source.fetch().await;

    match result {
        Err(QuoteError::RemoteApi { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "down");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_http_source_rejects_non_array_body() {
    let url = serve_once("200 OK", r#"{"posts":[]}"#).await;
    let source = HttpSource::new(url, &HttpConfig::default());

    let result = source.fetch().await;

    assert!(matches!(result, Err(QuoteError::RemoteFormat(_))));
}

#[tokio::test]
async fn test_http_source_connection_failure() {
    // 待ち受けのないポート
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let source = HttpSource::new(format!("http://{}/posts", addr), &HttpConfig::default());

    let result = source.fetch().await;

    assert!(matches!(result, Err(QuoteError::Network(_))));
}
