//! JSON API over the scraped tables
//!
//! Every table endpoint runs the same pipeline: fetch the competition's
//! upstream page, extract the rows and wrap them in the result envelope. Any
//! failure along the way becomes an error envelope with a 502 status.

mod routes;

pub use routes::{resolve, Route};

use crate::config::{CompetitionConfig, Config};
use crate::extract::{scorers_from_html, standings_from_html, ScorerOptions, TableKind};
use crate::fetcher::{build_http_client, fetch_html};
use crate::model::{
    package, ScorerRow, StandingsRow, INTERNAL_ERROR_MESSAGE, MALFORMED_MARKUP_MESSAGE,
    NOT_FOUND_MESSAGE, UPSTREAM_ERROR_MESSAGE,
};
use crate::server::Response;
use crate::{ErrorKind, TabellError};
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;

/// Table handlers for every configured competition
#[derive(Debug, Clone)]
pub struct Api {
    config: Arc<Config>,
    client: Client,
}

impl Api {
    /// Creates the API with a client built from `config`
    pub fn new(config: Arc<Config>) -> Result<Self, TabellError> {
        let client = build_http_client(&config.user_agent, &config.upstream)?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Answers `/{code}` and `/{code}/topscorers`
    pub async fn table(&self, code: &str, kind: TableKind) -> Response {
        let Some(competition) = self.config.competition(code) else {
            return Response::error(404, NOT_FOUND_MESSAGE);
        };

        match kind {
            TableKind::Standings => respond(competition, kind, self.standings(competition).await),
            TableKind::TopScorers => {
                if competition.topscorers_url.is_none() {
                    return Response::error(404, NOT_FOUND_MESSAGE);
                }
                respond(competition, kind, self.topscorers(competition).await)
            }
        }
    }

    /// Fetches and extracts the league table of `competition`
    pub async fn standings(
        &self,
        competition: &CompetitionConfig,
    ) -> Result<Vec<StandingsRow>, TabellError> {
        let html = fetch_html(&self.client, &competition.standings_url).await?;
        standings_from_html(&html)
    }

    /// Fetches and extracts the top-scorer table of `competition`
    ///
    /// A competition without a scorer page yields an empty list.
    pub async fn topscorers(
        &self,
        competition: &CompetitionConfig,
    ) -> Result<Vec<ScorerRow>, TabellError> {
        let Some(url) = &competition.topscorers_url else {
            return Ok(Vec::new());
        };

        let html = fetch_html(&self.client, url).await?;
        let options = ScorerOptions {
            skip_rows_missing_player_cells: competition.skip_rows_missing_player_cells,
        };
        scorers_from_html(&html, options)
    }
}

fn respond<T: Serialize>(
    competition: &CompetitionConfig,
    kind: TableKind,
    result: Result<Vec<T>, TabellError>,
) -> Response {
    match result {
        Ok(items) => {
            tracing::debug!(
                "Extracted {} {} rows for {}",
                items.len(),
                kind,
                competition.code
            );
            Response::json(200, &package(items))
        }
        Err(e) => {
            tracing::warn!("Failed to serve {} for {}: {}", kind, competition.code, e);
            error_response(&e)
        }
    }
}

/// Error envelope for a failed pipeline
pub fn error_response(error: &TabellError) -> Response {
    match error.kind() {
        ErrorKind::UpstreamUnavailable => Response::error(502, UPSTREAM_ERROR_MESSAGE),
        ErrorKind::MalformedMarkup => Response::error(502, MALFORMED_MARKUP_MESSAGE),
        ErrorKind::Internal => Response::error(500, INTERNAL_ERROR_MESSAGE),
    }
}
