//! Top-scorer extraction

use crate::extract::columns::{required_cells, PLAYER_COLUMNS, STAT_COLUMNS};
use crate::extract::document::{
    parse_html, parse_selector, reparse_row, strip_tabs_and_newlines, text_content,
};
use crate::model::ScorerRow;
use crate::{MarkupError, TabellError};
use scraper::Html;

pub const SCORER_ROW_SELECTOR: &str = "#player-statistics table tr";
pub const PLAYER_CELL_SELECTOR: &str = ".table__player-row";
pub const STAT_CELL_SELECTOR: &str = ".table__cell-small";

/// How rows without player cells are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScorerOptions {
    /// Skip a row whose player-cell list is empty instead of failing
    pub skip_rows_missing_player_cells: bool,
}

/// Extracts the top-scorer table
///
/// The first matched row is the header and is always skipped. Positions are
/// numbered from 1 in the order records are emitted; whatever rank the markup
/// shows is ignored.
pub fn extract_scorers(
    document: &Html,
    options: ScorerOptions,
) -> Result<Vec<ScorerRow>, TabellError> {
    let row_selector = parse_selector(SCORER_ROW_SELECTOR)?;
    let player_selector = parse_selector(PLAYER_CELL_SELECTOR)?;
    let stat_selector = parse_selector(STAT_CELL_SELECTOR)?;

    let mut items = Vec::new();
    let mut position = 1;

    for (index, row) in document.select(&row_selector).enumerate().skip(1) {
        let fragment = reparse_row(row);
        let player_cells: Vec<String> = fragment
            .select(&player_selector)
            .map(text_content)
            .collect();
        let stat_cells: Vec<String> = fragment.select(&stat_selector).map(text_content).collect();

        if player_cells.is_empty() && options.skip_rows_missing_player_cells {
            tracing::debug!("Skipping scorer row {} without player cells", index);
            continue;
        }

        let expected = required_cells(&PLAYER_COLUMNS);
        if player_cells.len() < expected {
            return Err(MarkupError::MissingPlayerCells {
                row: index,
                expected,
                found: player_cells.len(),
            }
            .into());
        }

        let expected = required_cells(&STAT_COLUMNS);
        if stat_cells.len() < expected {
            return Err(MarkupError::MissingStatCells {
                row: index,
                expected,
                found: stat_cells.len(),
            }
            .into());
        }

        let mut record = ScorerRow {
            position,
            ..ScorerRow::default()
        };
        for (cell, field) in PLAYER_COLUMNS {
            *field.slot(&mut record) = strip_tabs_and_newlines(&player_cells[cell]);
        }
        for (cell, field) in STAT_COLUMNS {
            *field.slot(&mut record) = stat_cells[cell].clone();
        }

        items.push(record);
        position += 1;
    }

    Ok(items)
}

/// Parses `html` and extracts the top-scorer table
pub fn scorers_from_html(
    html: &str,
    options: ScorerOptions,
) -> Result<Vec<ScorerRow>, TabellError> {
    let document = parse_html(html);
    extract_scorers(&document, options)
}
