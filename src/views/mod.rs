//! Server-rendered pages
//!
//! The pages are clients of the JSON API: each request fetches
//! `{api_base_url}/{code}` and renders whatever comes back. Nothing is kept
//! between requests.

mod render;

pub use render::{escape_html, render_index, render_standings_page};

use crate::config::Config;
use crate::model::{ErrorEnvelope, ResultEnvelope, StandingsRow};
use crate::server::Response;
use reqwest::Client;
use std::sync::Arc;

/// Layout of a rendered standings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Full table with every column
    Table,
    /// Compact black-and-white table for embedding
    BlackWhite,
}

/// A rendered page and the competition it shows
#[derive(Debug, PartialEq, Eq)]
pub struct ViewPage {
    pub path: &'static str,
    pub code: &'static str,
    pub title: &'static str,
    pub template: Template,
}

pub const VIEW_PAGES: &[ViewPage] = &[
    ViewPage {
        path: "allsvenskan",
        code: "as",
        title: "Allsvenskan",
        template: Template::Table,
    },
    ViewPage {
        path: "elitettan",
        code: "el",
        title: "Elitettan",
        template: Template::Table,
    },
    ViewPage {
        path: "damallsvenskan",
        code: "das",
        title: "Damallsvenskan",
        template: Template::Table,
    },
    ViewPage {
        path: "superettan",
        code: "se",
        title: "Superettan",
        template: Template::Table,
    },
    ViewPage {
        path: "allsvenskanbw",
        code: "as",
        title: "Allsvenskan",
        template: Template::BlackWhite,
    },
];

/// Why a page could not get its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The API could not be reached or sent something that is not an envelope
    Unreachable(String),
    /// The API answered with an error envelope
    Api(String),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(e) => write!(f, "API unreachable: {}", e),
            Self::Api(e) => write!(f, "API error: {}", e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Views {
    config: Arc<Config>,
    client: Client,
}

impl Views {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Fetches the competition's table from the API and renders `page`
    pub async fn page(&self, page: &ViewPage) -> Response {
        let generated = chrono::Local::now();
        match self.fetch_standings(page.code).await {
            Ok(rows) => Response::html(
                200,
                render_standings_page(page, Some(rows.as_slice()), &generated),
            ),
            Err(e) => {
                tracing::warn!("Rendering /{} without data: {}", page.path, e);
                Response::html(502, render_standings_page(page, None, &generated))
            }
        }
    }

    pub fn index(&self) -> Response {
        Response::html(200, render_index(&self.config.competitions, VIEW_PAGES))
    }

    /// Reads `/{code}` from the API
    pub async fn fetch_standings(&self, code: &str) -> Result<Vec<StandingsRow>, ViewError> {
        let url = format!(
            "{}/{}",
            self.config.views.api_base_url.trim_end_matches('/'),
            code
        );

        // Error envelopes arrive with a non-2xx status, so read the body either way.
        let body = match self.client.get(&url).send().await {
            Ok(response) => response
                .text()
                .await
                .map_err(|e| ViewError::Unreachable(e.to_string()))?,
            Err(e) => return Err(ViewError::Unreachable(e.to_string())),
        };

        parse_api_body(&body)
    }
}

/// Interprets a body returned by `/{code}`
pub fn parse_api_body(body: &str) -> Result<Vec<StandingsRow>, ViewError> {
    if let Ok(envelope) = serde_json::from_str::<ResultEnvelope<StandingsRow>>(body) {
        return Ok(envelope.result.item);
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Err(ViewError::Api(envelope.error)),
        Err(e) => Err(ViewError::Unreachable(format!("unexpected API response: {}", e))),
    }
}
