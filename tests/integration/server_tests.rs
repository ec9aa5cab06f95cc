use crate::{create_test_config, scorer_row, scorers_page, start_server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_topscorers_over_http() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/as/scorers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(scorers_page(&[scorer_row(
            "Joel Asoro",
            "Djurgårdens IF",
            12,
            3,
            27,
        )])))
        .mount(&upstream)
        .await;

    let (addr, _shutdown) = start_server(create_test_config(&upstream)).await;

    let response = reqwest::get(format!("http://{}/as/topscorers", addr))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let json: serde_json::Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(json["result"]["item"][0]["name"], "Joel Asoro");
    assert_eq!(json["result"]["item"][0]["games"], "27");
}

#[tokio::test]
async fn test_upstream_failure_over_http() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstream)
        .await;

    let (addr, _shutdown) = start_server(create_test_config(&upstream)).await;

    let response = reqwest::get(format!("http://{}/el", addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 502);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"Error":"Error in response from source"}"#
    );
}

#[tokio::test]
async fn test_unknown_routes() {
    let upstream = MockServer::start().await;
    let (addr, _shutdown) = start_server(create_test_config(&upstream)).await;

    for route in ["/xx", "/das", "/as/assists", "/as/topscorers/2022"] {
        let response = reqwest::get(format!("http://{}{}", addr, route))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404, "route {}", route);
        assert_eq!(response.text().await.unwrap(), r#"{"Error":"Not found"}"#);
    }
}

#[tokio::test]
async fn test_post_is_rejected() {
    let upstream = MockServer::start().await;
    let (addr, _shutdown) = start_server(create_test_config(&upstream)).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/as", addr))
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn test_garbage_request_line() {
    let upstream = MockServer::start().await;
    let (addr, _shutdown) = start_server(create_test_config(&upstream)).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"HELLO\r\n\r\n").await.unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();
    assert!(raw.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(raw.ends_with(r#"{"Error":"Bad request"}"#));
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let upstream = MockServer::start().await;
    let (addr, shutdown) = start_server(create_test_config(&upstream)).await;

    shutdown.send(true).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    assert!(TcpStream::connect(addr).await.is_err());
}
