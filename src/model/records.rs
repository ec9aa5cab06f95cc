use serde::{Deserialize, Serialize};

/// One team's line in a league table
///
/// Every field is the cell text exactly as it appeared upstream. The serialized
/// names are the ones the API has always used (`round` is games played, `gm`,
/// `im` and `ms` are goals for, goals against and goal difference).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub position: String,
    pub team: String,
    #[serde(rename = "round")]
    pub games_played: String,
    #[serde(rename = "win")]
    pub wins: String,
    #[serde(rename = "draw")]
    pub draws: String,
    #[serde(rename = "loss")]
    pub losses: String,
    #[serde(rename = "gm")]
    pub goals_for: String,
    #[serde(rename = "im")]
    pub goals_against: String,
    #[serde(rename = "ms")]
    pub goal_difference: String,
    pub points: String,
}

/// One player's line in a top-scorer table
///
/// `position` is assigned while extracting (1-based, in row order) and never
/// read from the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerRow {
    pub position: u32,
    pub name: String,
    pub team: String,
    pub goals: String,
    pub assists: String,
    pub games: String,
}
