//! Common utilities and helper functions shared across commands.

use crate::{
    models::{League, Team},
    Result, Week,
};

/// Highest scoring period ESPN serves for any season.
pub const MAX_SCORING_PERIOD: u16 = 18;

/// The last completed week: one before the league's current week, never below 1.
pub fn default_week(league: &League) -> Week {
    Week::new(league.current_week.as_u16().saturating_sub(1).max(1))
}

/// Validate a caller-supplied week against the league, or fall back to
/// [`default_week`].
pub fn resolve_week(league: &League, week: Option<i64>) -> Result<Week> {
    match week {
        Some(week) => Week::checked(week, league.final_week),
        None => Ok(default_week(league)),
    }
}

/// Display name for a team id that may not exist in the league.
pub fn team_label(league: &League, team: Option<&Team>, fallback_id: u32) -> String {
    team.map(|t| t.name.clone())
        .unwrap_or_else(|| format!("{} team {}", league.name, fallback_id))
}
