use crate::{create_test_config, scorer_row, scorers_page, standings_page, standings_row};
use allsvenskan_api::extract::TableKind;
use allsvenskan_api::Api;
use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_standings_end_to_end() {
    let upstream = MockServer::start().await;
    let page = standings_page(&[
        standings_row(1, "Malmö FF", 65),
        standings_row(2, "Hammarby IF", 60),
    ]);
    mount_page(&upstream, "/as/standings", 200, page).await;

    let api = Api::new(Arc::new(create_test_config(&upstream))).unwrap();
    let response = api.table("as", TableKind::Standings).await;
    assert_eq!(response.status, 200);

    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["result"]["round"], "latest");

    let items = json["result"]["item"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["position"], "1");
    assert_eq!(items[0]["team"], "Malmö FF");
    assert_eq!(items[0]["round"], "30");
    assert_eq!(items[0]["gm"], "60");
    assert_eq!(items[0]["points"], "65");
    assert_eq!(items[1]["team"], "Hammarby IF");
}

#[tokio::test]
async fn test_scorers_end_to_end() {
    let upstream = MockServer::start().await;
    let page = scorers_page(&[
        scorer_row("Isaac Kiese Thelin", "Malmö FF", 15, 4, 28),
        scorer_row("Nahir Besara", "Hammarby IF", 13, 7, 30),
    ]);
    mount_page(&upstream, "/as/scorers", 200, page).await;

    let api = Api::new(Arc::new(create_test_config(&upstream))).unwrap();
    let response = api.table("as", TableKind::TopScorers).await;
    assert_eq!(response.status, 200);

    let json: Value = serde_json::from_str(&response.body).unwrap();
    let items = json["result"]["item"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["position"], 1);
    assert_eq!(items[0]["name"], "Isaac Kiese Thelin");
    assert_eq!(items[0]["team"], "Malmö FF");
    assert_eq!(items[0]["goals"], "15");
    assert_eq!(items[0]["assists"], "4");
    assert_eq!(items[0]["games"], "28");

    assert_eq!(items[1]["position"], 2);
    assert_eq!(items[1]["name"], "Nahir Besara");
}

#[tokio::test]
async fn test_upstream_error_status() {
    let upstream = MockServer::start().await;
    mount_page(&upstream, "/as/standings", 500, "oops".to_string()).await;

    let api = Api::new(Arc::new(create_test_config(&upstream))).unwrap();
    let response = api.table("as", TableKind::Standings).await;

    assert_eq!(response.status, 502);
    assert_eq!(response.body, r#"{"Error":"Error in response from source"}"#);
}

#[tokio::test]
async fn test_upstream_unreachable() {
    let upstream = MockServer::start().await;
    let mut config = create_test_config(&upstream);
    config.competitions[0].standings_url = "http://127.0.0.1:1/as".to_string();

    let api = Api::new(Arc::new(config)).unwrap();
    let response = api.table("as", TableKind::Standings).await;

    assert_eq!(response.status, 502);
    assert_eq!(response.body, r#"{"Error":"Error in response from source"}"#);
}

#[tokio::test]
async fn test_malformed_standings() {
    let upstream = MockServer::start().await;
    let page = standings_page(&[
        standings_row(1, "Malmö FF", 65),
        "<tr class=\"standings-table__row\"><td>2</td><td></td><td>AIK</td></tr>".to_string(),
    ]);
    mount_page(&upstream, "/as/standings", 200, page).await;

    let api = Api::new(Arc::new(create_test_config(&upstream))).unwrap();
    let response = api.table("as", TableKind::Standings).await;

    assert_eq!(response.status, 502);
    assert_eq!(response.body, r#"{"Error":"Unexpected markup from source"}"#);
}

#[tokio::test]
async fn test_page_without_table_is_empty() {
    let upstream = MockServer::start().await;
    mount_page(
        &upstream,
        "/as/standings",
        200,
        "<html><body><p>Säsongen har inte börjat</p></body></html>".to_string(),
    )
    .await;

    let api = Api::new(Arc::new(create_test_config(&upstream))).unwrap();
    let response = api.table("as", TableKind::Standings).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"result":{"round":"latest","item":[]}}"#);
}

#[tokio::test]
async fn test_scorer_row_without_player_cells() {
    let upstream = MockServer::start().await;
    let page = scorers_page(&[
        scorer_row("Isaac Kiese Thelin", "Malmö FF", 15, 4, 28),
        "<tr><td colspan=\"6\">Annons</td></tr>".to_string(),
        scorer_row("Nahir Besara", "Hammarby IF", 13, 7, 30),
    ]);
    mount_page(&upstream, "/as/scorers", 200, page.clone()).await;
    mount_page(&upstream, "/el/scorers", 200, page).await;

    let mut config = create_test_config(&upstream);
    config.competitions[1].skip_rows_missing_player_cells = true;
    let api = Api::new(Arc::new(config)).unwrap();

    let strict = api.table("as", TableKind::TopScorers).await;
    assert_eq!(strict.status, 502);
    assert_eq!(strict.body, r#"{"Error":"Unexpected markup from source"}"#);

    let lenient = api.table("el", TableKind::TopScorers).await;
    assert_eq!(lenient.status, 200);
    let json: Value = serde_json::from_str(&lenient.body).unwrap();
    let items = json["result"]["item"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["position"], 2);
    assert_eq!(items[1]["name"], "Nahir Besara");
}

#[tokio::test]
async fn test_each_request_fetches_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/as/standings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(standings_page(&[standings_row(
                1, "AIK", 3,
            )])),
        )
        .expect(2)
        .mount(&upstream)
        .await;

    let api = Api::new(Arc::new(create_test_config(&upstream))).unwrap();
    let first = api.table("as", TableKind::Standings).await;
    let second = api.table("as", TableKind::Standings).await;

    assert_eq!(first, second);
    upstream.verify().await;
}
