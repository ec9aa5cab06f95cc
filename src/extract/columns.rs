//! Column layouts of the upstream tables
//!
//! Each layout is a list of `(cell index, field)` pairs. A row is accepted when
//! it has at least [`required_cells`] cells; cells not listed are ignored.

use crate::model::{ScorerRow, StandingsRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingsField {
    Position,
    Team,
    GamesPlayed,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Points,
}

impl StandingsField {
    pub fn slot(self, row: &mut StandingsRow) -> &mut String {
        match self {
            Self::Position => &mut row.position,
            Self::Team => &mut row.team,
            Self::GamesPlayed => &mut row.games_played,
            Self::Wins => &mut row.wins,
            Self::Draws => &mut row.draws,
            Self::Losses => &mut row.losses,
            Self::GoalsFor => &mut row.goals_for,
            Self::GoalsAgainst => &mut row.goals_against,
            Self::GoalDifference => &mut row.goal_difference,
            Self::Points => &mut row.points,
        }
    }
}

/// Direct children of a `standings-table__row`. Cells 1 and 3 hold the
/// movement arrow and the club logo.
pub const STANDINGS_COLUMNS: [(usize, StandingsField); 10] = [
    (0, StandingsField::Position),
    (2, StandingsField::Team),
    (4, StandingsField::GamesPlayed),
    (5, StandingsField::Wins),
    (6, StandingsField::Draws),
    (7, StandingsField::Losses),
    (8, StandingsField::GoalsFor),
    (9, StandingsField::GoalsAgainst),
    (10, StandingsField::GoalDifference),
    (11, StandingsField::Points),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerField {
    Name,
    Team,
    Goals,
    Assists,
    Games,
}

impl ScorerField {
    pub fn slot(self, row: &mut ScorerRow) -> &mut String {
        match self {
            Self::Name => &mut row.name,
            Self::Team => &mut row.team,
            Self::Goals => &mut row.goals,
            Self::Assists => &mut row.assists,
            Self::Games => &mut row.games,
        }
    }
}

/// `.table__player-row` cells of a scorer row
pub const PLAYER_COLUMNS: [(usize, ScorerField); 2] =
    [(0, ScorerField::Name), (1, ScorerField::Team)];

/// `.table__cell-small` cells of a scorer row
pub const STAT_COLUMNS: [(usize, ScorerField); 3] = [
    (0, ScorerField::Goals),
    (1, ScorerField::Assists),
    (2, ScorerField::Games),
];

/// Smallest number of cells a row needs for `columns` to be addressable
pub fn required_cells<F>(columns: &[(usize, F)]) -> usize {
    columns
        .iter()
        .map(|(index, _)| index + 1)
        .max()
        .unwrap_or(0)
}
