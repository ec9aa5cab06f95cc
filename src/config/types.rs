use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub views: ViewsConfig,
    #[serde(rename = "competition", default = "default_competitions")]
    pub competitions: Vec<CompetitionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            user_agent: UserAgentConfig::default(),
            upstream: UpstreamConfig::default(),
            views: ViewsConfig::default(),
            competitions: default_competitions(),
        }
    }
}

impl Config {
    /// Looks up a competition by its route code
    pub fn competition(&self, code: &str) -> Option<&CompetitionConfig> {
        self.competitions.iter().find(|c| c.code == code)
    }
}

/// Listen address configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// User agent sent to the upstream site
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    #[serde(default = "default_agent_name")]
    pub name: String,

    #[serde(default = "default_agent_version")]
    pub version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            version: default_agent_version(),
        }
    }
}

/// Upstream fetch behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Whole-request timeout for a single upstream fetch (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
        }
    }
}

/// Server-rendered pages
#[derive(Debug, Clone, Deserialize)]
pub struct ViewsConfig {
    /// Where the pages read the JSON API from
    #[serde(rename = "api-base-url", default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

/// One competition served under `/{code}`
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionConfig {
    /// Route segment, e.g. "as"
    pub code: String,

    /// Display name, e.g. "Allsvenskan"
    pub name: String,

    /// Page holding the league table for the current season
    #[serde(rename = "standings-url")]
    pub standings_url: String,

    /// Page holding the player statistics, if the competition has one
    #[serde(rename = "topscorers-url", default)]
    pub topscorers_url: Option<String>,

    /// Silently drop scorer rows without player cells instead of failing
    #[serde(rename = "skip-rows-missing-player-cells", default)]
    pub skip_rows_missing_player_cells: bool,
}

impl CompetitionConfig {
    fn builtin(code: &str, name: &str, standings_url: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            standings_url: standings_url.to_string(),
            topscorers_url: None,
            skip_rows_missing_player_cells: false,
        }
    }
}

pub const DEFAULT_API_BASE_URL: &str = "https://allsvenskan-api.herokuapp.com";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3002
}

fn default_agent_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_agent_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_competitions() -> Vec<CompetitionConfig> {
    let base = "https://www.svenskfotboll.se/serier-cuper";

    let mut allsvenskan = CompetitionConfig::builtin(
        "as",
        "Allsvenskan",
        &format!("{base}/tabell-och-resultat/allsvenskan-2024/115560/"),
    );
    allsvenskan.topscorers_url = Some(format!("{base}/spelarstatistik/allsvenskan-2022/97366/"));

    vec![
        allsvenskan,
        CompetitionConfig::builtin(
            "das",
            "Damallsvenskan",
            &format!("{base}/tabell-och-resultat/obos-damallsvenskan-2024/115477/"),
        ),
        CompetitionConfig::builtin(
            "el",
            "Elitettan",
            &format!("{base}/tabell-och-resultat/elitettan-2024/115475/"),
        ),
        CompetitionConfig::builtin(
            "se",
            "Superettan",
            &format!("{base}/tabell-och-resultat/superettan-2024/115526/"),
        ),
    ]
}
