use seyeon_coingecko::markets::{CoinsMarkets, MarketsParams};
use seyeon_coingecko::{CoingeckoClient, CoingeckoError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::test;

/// Answers exactly one request with `status_line` and `body`, handing the
/// raw request head back through the returned channel.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
    });

    (format!("http://{addr}/api/v3"), rx)
}

#[test]
pub async fn sends_fixed_query_and_decodes_records() {
    let (base_url, request) = serve_once(
        "200 OK",
        r#"[{"name":"A","symbol":"a","price_change_percentage_24h":-10.0},
            {"name":"B","symbol":"b","price_change_percentage_24h":5.5},
            {"name":"C","symbol":"c","price_change_percentage_24h":null}]"#,
    )
    .await;

    let client = CoingeckoClient::with_base_url(&base_url).unwrap();
    let records = client
        .call::<CoinsMarkets>(&MarketsParams::default())
        .await
        .expect("Failed to fetch markets");

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].price_change_percentage_24h, None);

    let head = request.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /api/v3/coins/markets?"));
    assert!(request_line.contains(
        "vs_currency=usd&order=market_cap_desc&per_page=100&page=1&price_change_percentage=1h%2C24h%2C7d"
    ));
}

#[test]
pub async fn not_found_reports_service_error() {
    let (base_url, _request) = serve_once("404 Not Found", r#"{"error":"not found"}"#).await;

    let client = CoingeckoClient::with_base_url(&base_url).unwrap();
    let err = client
        .call::<CoinsMarkets>(&MarketsParams::default())
        .await
        .unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.to_string(), "Error fetching data from CoinGecko: not found");
}

#[test]
pub async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CoingeckoClient::with_base_url(&format!("http://{addr}")).unwrap();
    let err = client
        .call::<CoinsMarkets>(&MarketsParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CoingeckoError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
#[ignore = "hits the live CoinGecko API"]
pub async fn fetch_live_markets() {
    let client = CoingeckoClient::new().expect("Failed to build client");

    let response = client
        .call::<CoinsMarkets>(&MarketsParams::builder().per_page(10).build())
        .await
        .expect("Failed to fetch markets");

    assert!(response.len() <= 10);
    println!("{response:?}");
}
