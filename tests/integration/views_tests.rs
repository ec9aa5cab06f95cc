use crate::{create_test_config, standings_page, standings_row, start_server};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENVELOPE: &str = r#"{"result":{"round":"latest","item":[
    {"position":"1","team":"Malmö FF","round":"30","win":"20","draw":"5","loss":"5","gm":"60","im":"25","ms":"35","points":"65"},
    {"position":"2","team":"Hammarby IF","round":"30","win":"18","draw":"6","loss":"6","gm":"55","im":"30","ms":"25","points":"60"}
]}}"#;

async fn get(url: String) -> (u16, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_page_renders_api_rows() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/as"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ENVELOPE))
        .expect(2)
        .mount(&api)
        .await;

    let (addr, _shutdown) = start_server(create_test_config(&api)).await;

    let (status, html) = get(format!("http://{}/allsvenskan", addr)).await;
    assert_eq!(status, 200);
    assert!(html.contains("<h1>Allsvenskan</h1>"));
    let first = html.find("Malmö FF").unwrap();
    let second = html.find("Hammarby IF").unwrap();
    assert!(first < second);

    let (status, html) = get(format!("http://{}/allsvenskanbw", addr)).await;
    assert_eq!(status, 200);
    assert!(html.contains("Hammarby IF"));
    assert!(!html.contains("<th>GM</th>"));

    api.verify().await;
}

#[tokio::test]
async fn test_page_shows_notice_on_api_error() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/el"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string(r#"{"Error":"Error in response from source"}"#),
        )
        .mount(&api)
        .await;

    let (addr, _shutdown) = start_server(create_test_config(&api)).await;

    let (status, html) = get(format!("http://{}/elitettan", addr)).await;
    assert_eq!(status, 502);
    assert!(html.contains("class=\"unavailable\""));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn test_page_shows_notice_when_api_unreachable() {
    let api = MockServer::start().await;
    let mut config = create_test_config(&api);
    config.views.api_base_url = "http://127.0.0.1:1".to_string();

    let (addr, _shutdown) = start_server(config).await;

    let (status, html) = get(format!("http://{}/superettan", addr)).await;
    assert_eq!(status, 502);
    assert!(html.contains("class=\"unavailable\""));
}

#[tokio::test]
async fn test_pages_read_from_a_live_api() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/as/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_string(standings_page(&[
            standings_row(1, "BK Häcken", 67),
            standings_row(2, "Djurgårdens IF", 58),
        ])))
        .mount(&upstream)
        .await;

    let (api_addr, _api_shutdown) = start_server(create_test_config(&upstream)).await;

    let mut config = create_test_config(&upstream);
    config.views.api_base_url = format!("http://{}", api_addr);
    let (addr, _shutdown) = start_server(config).await;

    let (status, html) = get(format!("http://{}/allsvenskan", addr)).await;
    assert_eq!(status, 200);
    assert!(html.contains("<td class=\"team\">BK Häcken</td>"));
    assert!(html.contains("<td>67</td>"));
}

#[tokio::test]
async fn test_index_lists_routes() {
    let api = MockServer::start().await;
    let (addr, _shutdown) = start_server(create_test_config(&api)).await;

    let (status, html) = get(format!("http://{}/", addr)).await;
    assert_eq!(status, 200);
    assert!(html.contains("href=\"/damallsvenskan\""));
    assert!(html.contains("href=\"/el/topscorers\""));
}
