//! Table extraction from upstream pages
//!
//! This module turns a fetched page into records:
//! - Parsing the page and re-parsing row fragments (`document`)
//! - Fixed column layouts per table (`columns`)
//! - League table rows (`standings`)
//! - Top-scorer rows (`scorers`)

pub mod columns;
mod document;
mod scorers;
mod standings;

pub use document::{
    child_elements, parse_html, parse_selector, reparse_row, strip_tabs_and_newlines,
    text_content,
};
pub use scorers::{
    extract_scorers, scorers_from_html, ScorerOptions, PLAYER_CELL_SELECTOR,
    SCORER_ROW_SELECTOR, STAT_CELL_SELECTOR,
};
pub use standings::{extract_standings, standings_from_html, STANDINGS_ROW_SELECTOR};

/// Which extraction rules a table uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Standings,
    TopScorers,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standings => write!(f, "standings"),
            Self::TopScorers => write!(f, "topscorers"),
        }
    }
}
