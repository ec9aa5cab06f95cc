//! League table extraction

use crate::extract::columns::{required_cells, STANDINGS_COLUMNS};
use crate::extract::document::{child_elements, parse_html, parse_selector, text_content};
use crate::model::StandingsRow;
use crate::{MarkupError, TabellError};
use scraper::{ElementRef, Html};

pub const STANDINGS_ROW_SELECTOR: &str = "table.standings-table tr.standings-table__row";

/// Extracts every team row of the league table, in document order
///
/// Rows are not filtered. A row with too few cells fails the whole call with
/// [`MarkupError::MissingCells`].
pub fn extract_standings(document: &Html) -> Result<Vec<StandingsRow>, TabellError> {
    let selector = parse_selector(STANDINGS_ROW_SELECTOR)?;

    document
        .select(&selector)
        .enumerate()
        .map(|(index, row)| parse_standings_row(index, row))
        .collect()
}

/// Parses `html` and extracts the league table
pub fn standings_from_html(html: &str) -> Result<Vec<StandingsRow>, TabellError> {
    let document = parse_html(html);
    extract_standings(&document)
}

fn parse_standings_row(index: usize, row: ElementRef<'_>) -> Result<StandingsRow, TabellError> {
    let cells = child_elements(row);
    let expected = required_cells(&STANDINGS_COLUMNS);
    if cells.len() < expected {
        return Err(MarkupError::MissingCells {
            row: index,
            expected,
            found: cells.len(),
        }
        .into());
    }

    let mut record = StandingsRow::default();
    for (cell, field) in STANDINGS_COLUMNS {
        *field.slot(&mut record) = text_content(cells[cell]);
    }
    Ok(record)
}
