use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

use crate::{LeagueId, Season};

/// Agents send team ids both as `3` and `"3"`; accept either as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

// ============================================================
// Shared league scope
// ============================================================

/// League and season overrides accepted by every query tool
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct LeagueScope {
    /// ESPN league id. Defaults to the session's league
    #[serde(default)]
    pub league_id: Option<u32>,
    /// Season year, e.g. 2024. Defaults to the session's season
    #[serde(default)]
    pub year: Option<u16>,
}

impl LeagueScope {
    pub fn league_id(&self) -> Option<LeagueId> {
        self.league_id.map(LeagueId::new)
    }

    pub fn season(&self) -> Option<Season> {
        self.year.map(Season::new)
    }
}

// ============================================================
// Session tools
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AuthenticateParams {
    /// The `espn_s2` cookie from a logged-in ESPN browser session
    pub espn_s2: String,
    /// The `SWID` cookie, including braces
    pub swid: String,
    /// League to use by default from now on
    #[serde(default)]
    pub league_id: Option<u32>,
    /// Season to use by default from now on
    #[serde(default)]
    pub year: Option<u16>,
}

// ============================================================
// Query tools
// ============================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct LeagueParams {
    #[serde(flatten)]
    pub scope: LeagueScope,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TeamParams {
    /// Team id, team name, owner name or part of either
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub team_query: String,
    #[serde(flatten)]
    pub scope: LeagueScope,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindTeamParams {
    /// Team id, team name, owner name or part of either
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub query: String,
    #[serde(flatten)]
    pub scope: LeagueScope,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PlayerStatsParams {
    /// Full or partial player name, case-insensitive
    pub player_name: String,
    /// Single week to report. Omit for every week on record
    #[serde(default)]
    pub week: Option<i64>,
    #[serde(flatten)]
    pub scope: LeagueScope,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct WeeklyMatchupsParams {
    /// Week to report. Defaults to the last completed week
    #[serde(default)]
    pub week: Option<i64>,
    #[serde(flatten)]
    pub scope: LeagueScope,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MatchupDetailParams {
    /// Week to report. Defaults to the last completed week
    #[serde(default)]
    pub week: Option<i64>,
    /// First team: id, name or owner
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub team_a_query: String,
    /// Second team: id, name or owner
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub team_b_query: String,
    #[serde(flatten)]
    pub scope: LeagueScope,
}
