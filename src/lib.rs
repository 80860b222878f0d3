//! ESPN Fantasy Football MCP Server Library
//!
//! Serves ESPN Fantasy Football league data (standings, rosters, player
//! stats and matchups) to AI agents over the Model Context Protocol.
//!
//! ## Features
//!
//! - **League Overview**: League settings, current week and standings
//! - **Team Lookup**: Resolve teams by id, exact name, owner or partial name
//! - **Rosters and Players**: Lineup slots, injury status and weekly stats
//! - **Matchups**: Weekly pairings and side-by-side lineups with breakdowns
//! - **Private Leagues**: Session cookies supplied at startup or at runtime
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use espn_ffl_mcp::{
//!     commands::league_data::get_standings, EspnClient, LeagueId, Season, SessionStore,
//! };
//!
//! # async fn example() -> espn_ffl_mcp::Result<()> {
//! let client = EspnClient::new()?;
//! let sessions = Arc::new(SessionStore::new(
//!     Some(LeagueId::new(123456)),
//!     Some(Season::new(2024)),
//!     None,
//! ));
//!
//! let session = sessions.get_session(None, None)?;
//! let report = get_standings(&client, &session).await?;
//! println!("{} leads", report.standings[0].name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your ESPN league ID to avoid passing it in every tool call:
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! ```
#![recursion_limit = "256"]

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod mcp;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use cli::types::{pro_team_abbrev, LeagueId, LineupSlot, PlayerId, Position, Season, TeamId, Week};
pub use commands::team_lookup::MatchPolicy;
pub use error::{EspnError, Result};
pub use espn::{http::EspnClient, FantasyDataSource};
pub use session::{Credentials, Session, SessionStore};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
