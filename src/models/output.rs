//! Output models returned by the tools as JSON.
//!
//! These are flat, snake_case views over the league records; the tool layer
//! serializes them with `serde_json::to_string_pretty`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    models::{GameResult, Owner, Player, Record, StatLine, Team, Transactions},
    LeagueId, LineupSlot, PlayerId, Position, Season, TeamId, Week,
};

/// Overview for `get_league_info`.
#[derive(Debug, Serialize)]
pub struct LeagueInfo {
    pub league_id: LeagueId,
    pub season: Season,
    pub name: String,
    pub scoring_type: Option<String>,
    pub current_week: Week,
    /// Latest NFL scoring period, which can run ahead of the fantasy week.
    pub nfl_week: Week,
    pub final_week: u16,
    pub regular_season_weeks: Option<u16>,
    pub playoff_team_count: Option<u16>,
    pub team_count: usize,
    pub teams: Vec<String>,
}

/// One rostered player for `get_team_roster`.
#[derive(Debug, Serialize)]
pub struct RosterPlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub pro_team: String,
    pub injury_status: Option<String>,
    pub injured: bool,
    pub lineup_slot: LineupSlot,
    pub total_points: Option<f64>,
    pub projected_total_points: Option<f64>,
    pub season_stats: Option<StatLine>,
    pub current_week_stats: Option<StatLine>,
    pub next_week_projected_stats: Option<StatLine>,
}

impl RosterPlayer {
    pub fn from_player(player: &Player, current_week: Week) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            position: player.position,
            pro_team: player.pro_team.clone(),
            injury_status: player.injury_status.clone(),
            injured: player.injured,
            lineup_slot: player.lineup_slot,
            total_points: player.total_points(),
            projected_total_points: player.projected_total_points(),
            season_stats: player.season_line().cloned(),
            current_week_stats: player.week_line(current_week).cloned(),
            next_week_projected_stats: player.next_week_projection(current_week),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub league_id: LeagueId,
    pub season: Season,
    pub team_id: TeamId,
    pub team_name: String,
    pub owner: Option<String>,
    pub record: Record,
    pub current_week: Week,
    pub players: Vec<RosterPlayer>,
}

/// Team profile for `get_team_info`.
#[derive(Debug, Serialize)]
pub struct TeamInfo {
    pub league_id: LeagueId,
    pub season: Season,
    pub team_id: TeamId,
    pub name: String,
    pub abbrev: Option<String>,
    pub owners: Vec<Owner>,
    pub record: Record,
    pub transactions: Transactions,
    pub playoff_seed: Option<u32>,
    pub final_standing: Option<u32>,
    pub playoff_pct: Option<f64>,
    /// Per matchup period results, byes included.
    pub outcomes: Vec<GameResult>,
}

impl TeamInfo {
    pub fn new(league_id: LeagueId, season: Season, team: &Team) -> Self {
        Self {
            league_id,
            season,
            team_id: team.id,
            name: team.name.clone(),
            abbrev: team.abbrev.clone(),
            owners: team.owners.clone(),
            record: team.record,
            transactions: team.transactions,
            playoff_seed: team.playoff_seed,
            final_standing: team.final_standing,
            playoff_pct: team.playoff_pct,
            outcomes: team.schedule.clone(),
        }
    }
}

/// Result of `find_team`, including which rule matched.
#[derive(Debug, Serialize)]
pub struct TeamMatch {
    pub league_id: LeagueId,
    pub season: Season,
    pub team_id: TeamId,
    pub name: String,
    pub owner: Option<String>,
    pub matched_by: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlayerStatsReport {
    pub league_id: LeagueId,
    pub season: Season,
    pub team_id: TeamId,
    pub team_name: String,
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub pro_team: String,
    pub injury_status: Option<String>,
    pub injured: bool,
    pub total_points: Option<f64>,
    pub projected_total_points: Option<f64>,
    /// Set when the caller asked for a single week.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<Week>,
    /// Scoring period -> stat line; period 0 is the season total.
    pub stats: BTreeMap<u16, StatLine>,
}

#[derive(Debug, Serialize)]
pub struct StandingRow {
    pub rank: usize,
    pub team_id: TeamId,
    pub name: String,
    pub owner: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub playoff_seed: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct StandingsReport {
    pub league_id: LeagueId,
    pub season: Season,
    pub standings: Vec<StandingRow>,
}

/// One side of a weekly pairing. A bye has no team id and the name `"BYE"`.
#[derive(Debug, Serialize)]
pub struct MatchupTeam {
    pub team_id: Option<TeamId>,
    pub name: String,
    pub owner: Option<String>,
    pub score: f64,
    pub projected_score: Option<f64>,
}

impl MatchupTeam {
    pub fn bye() -> Self {
        Self {
            team_id: None,
            name: "BYE".to_string(),
            owner: None,
            score: 0.0,
            projected_score: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchupSummary {
    pub home: MatchupTeam,
    pub away: MatchupTeam,
    pub winner: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WeeklyMatchups {
    pub league_id: LeagueId,
    pub season: Season,
    pub week: Week,
    pub matchup_period: u16,
    pub matchups: Vec<MatchupSummary>,
}

/// A player in a matchup lineup, scored for one week.
#[derive(Debug, Serialize)]
pub struct LineupPlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub pro_team: String,
    pub lineup_slot: LineupSlot,
    pub starter: bool,
    pub injury_status: Option<String>,
    pub points: Option<f64>,
    pub projected_points: Option<f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub breakdown: BTreeMap<String, f64>,
}

impl LineupPlayer {
    pub fn from_player(player: &Player, week: Week) -> Self {
        let line = player.week_line(week);
        Self {
            id: player.id,
            name: player.name.clone(),
            position: player.position,
            pro_team: player.pro_team.clone(),
            lineup_slot: player.lineup_slot,
            starter: player.lineup_slot.is_starter(),
            injury_status: player.injury_status.clone(),
            points: line.and_then(|l| l.points),
            projected_points: line.and_then(|l| l.projected_points),
            breakdown: line.map(|l| l.breakdown.clone()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamLineup {
    pub team_id: TeamId,
    pub name: String,
    pub owner: Option<String>,
    pub score: f64,
    pub projected_score: Option<f64>,
    pub on_bye: bool,
    /// `"HOME"` or `"AWAY"` in this week's box score; absent on a bye.
    pub side: Option<&'static str>,
    pub lineup: Vec<LineupPlayer>,
}

/// Result of `get_detailed_matchup_info`.
#[derive(Debug, Serialize)]
pub struct MatchupDetail {
    pub league_id: LeagueId,
    pub season: Season,
    pub week: Week,
    pub matchup_period: u16,
    pub team_a: TeamLineup,
    pub team_b: TeamLineup,
    /// Whether the two teams play each other this week.
    pub head_to_head: bool,
    /// `"HOME"`, `"AWAY"` or `"TIE"` for the shared pairing. Read it
    /// against each team's `side`.
    pub winner: Option<&'static str>,
    /// Id of the team that won the shared pairing; absent on a tie.
    pub winning_team_id: Option<TeamId>,
}

/// Reply to `authenticate` and `logout`.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub league_id: Option<LeagueId>,
    pub season: Option<Season>,
    pub message: String,
}
