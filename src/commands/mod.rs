//! Query implementations behind the MCP tools.
//!
//! Every command takes the data source and a resolved [`crate::Session`],
//! fetches fresh league data and reshapes it into a [`crate::models::output`]
//! record. Nothing is cached between calls.

pub mod common;
pub mod league_data;
pub mod matchups;
pub mod player_data;
pub mod roster;
pub mod team_lookup;

#[cfg(test)]
pub(crate) mod fixtures;


use crate::{EspnError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id_or_fallback(league_id, std::env::var(LEAGUE_ID_ENV_VAR).ok().as_deref())
}

/// An explicit id wins; otherwise the fallback text must parse as an id.
fn league_id_or_fallback(league_id: Option<LeagueId>, fallback: Option<&str>) -> Result<LeagueId> {
    league_id
        .or_else(|| fallback.and_then(|s| s.parse::<LeagueId>().ok()))
        .ok_or_else(|| EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}
