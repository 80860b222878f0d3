//! Wire types for the ESPN v3 league endpoint.
//!
//! These mirror the JSON ESPN sends and are only used on the way in; the
//! rest of the crate works with the validated records in [`crate::models`].

use serde::{de::Error, Deserialize, Deserializer};
use std::collections::BTreeMap;


fn de_str_key_map_u16_vec<'de, D>(deserializer: D) -> Result<BTreeMap<u16, Vec<u16>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Vec<u16>> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| k.parse::<u16>().map(|kk| (kk, v)).map_err(D::Error::custom))
        .collect()
}

/// Root of `/seasons/{season}/segments/0/leagues/{id}` for any combination of views.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeague {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub season_id: Option<u16>,
    #[serde(default)]
    pub scoring_period_id: Option<u16>,
    #[serde(default)]
    pub status: RawStatus,
    #[serde(default)]
    pub settings: Option<RawSettings>,
    #[serde(default)]
    pub teams: Vec<RawTeam>,
    #[serde(default)]
    pub members: Vec<RawMember>,
    #[serde(default)]
    pub schedule: Vec<RawScheduleItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStatus {
    pub current_matchup_period: Option<u16>,
    pub first_scoring_period: Option<u16>,
    pub final_scoring_period: Option<u16>,
    pub latest_scoring_period: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scoring_settings: RawScoringSettings,
    #[serde(default)]
    pub schedule_settings: RawScheduleSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawScoringSettings {
    pub scoring_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawScheduleSettings {
    pub matchup_period_count: Option<u16>,
    pub playoff_team_count: Option<u16>,
    /// Matchup period -> the scoring periods (weeks) it spans. Keys come in as strings.
    #[serde(deserialize_with = "de_str_key_map_u16_vec")]
    pub matchup_periods: BTreeMap<u16, Vec<u16>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    pub id: u32,
    /// Current payloads carry `name`; older seasons split it into location + nickname.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
    /// Member GUIDs, resolved against `RawLeague::members`.
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub record: RawRecordSet,
    #[serde(default)]
    pub transaction_counter: RawTransactionCounter,
    #[serde(default)]
    pub playoff_seed: Option<u32>,
    #[serde(default)]
    pub rank_calculated_final: Option<u32>,
    #[serde(default)]
    pub current_simulation_results: Option<RawSimulationResults>,
    #[serde(default)]
    pub roster: Option<RawRoster>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecordSet {
    pub overall: Option<RawRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTransactionCounter {
    pub acquisitions: u32,
    pub drops: u32,
    pub trades: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSimulationResults {
    pub playoff_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRoster {
    pub entries: Vec<RawRosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRosterEntry {
    pub player_id: i64,
    #[serde(default = "bench_slot")]
    pub lineup_slot_id: i32,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub player_pool_entry: Option<RawPlayerPoolEntry>,
}

fn bench_slot() -> i32 {
    20
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayerPoolEntry {
    #[serde(default)]
    pub applied_stat_total: Option<f64>,
    pub player: RawPlayer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayer {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub default_position_id: i32,
    #[serde(default)]
    pub pro_team_id: i32,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub injured: Option<bool>,
    #[serde(default)]
    pub stats: Vec<RawPlayerStats>,
}

/// Player statistics for a specific period
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayerStats {
    pub season_id: u16,
    pub scoring_period_id: u16,
    pub stat_source_id: u8,
    #[serde(default)]
    pub stat_split_type_id: u8,
    #[serde(default)]
    pub applied_total: Option<f64>,
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

/// One pairing from the `mMatchupScore` / `mScoreboard` views.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduleItem {
    #[serde(default)]
    pub id: Option<u32>,
    pub matchup_period_id: u16,
    #[serde(default)]
    pub home: Option<RawMatchupTeam>,
    /// Missing on bye weeks.
    #[serde(default)]
    pub away: Option<RawMatchupTeam>,
    #[serde(default)]
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchupTeam {
    pub team_id: u32,
    #[serde(default)]
    pub total_points: f64,
    /// Present while games are in progress.
    #[serde(default)]
    pub total_points_live: Option<f64>,
    #[serde(default)]
    pub total_projected_points_live: Option<f64>,
    #[serde(default)]
    pub roster_for_current_scoring_period: Option<RawRoster>,
}
