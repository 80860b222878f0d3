//! Command-line and environment configuration for the server binary.

pub mod types;

use std::path::PathBuf;

use clap::Parser;
use types::{LeagueId, Season};

/// Default location of the git-ignored secrets file.
pub const DEFAULT_SECRETS_PATH: &str = ".venv/secrets.json";

#[derive(Debug, Parser)]
#[clap(
    name = "espn-ffl-mcp",
    about = "MCP server exposing ESPN Fantasy Football data over stdio"
)]
pub struct Args {
    /// JSON file with `espn_s2`, `swid` and optional `league_id` / `year`.
    #[clap(long, env = "ESPN_FFL_SECRETS", default_value = DEFAULT_SECRETS_PATH)]
    pub secrets: PathBuf,

    /// Default league used when a tool call omits `league_id`.
    #[clap(long, short, env = "ESPN_FFL_LEAGUE_ID")]
    pub league_id: Option<LeagueId>,

    /// Default season year (e.g. 2025). Falls back to the current season.
    #[clap(long, short, env = "ESPN_FFL_SEASON")]
    pub season: Option<Season>,

    /// Override the ESPN API base URL.
    #[clap(long, env = "ESPN_FFL_BASE_URL", default_value = crate::espn::http::FFL_BASE_URL)]
    pub base_url: String,

    /// Fail with a list of candidates instead of taking the first team
    /// when a lookup matches several teams.
    #[clap(long)]
    pub strict_team_match: bool,
}
