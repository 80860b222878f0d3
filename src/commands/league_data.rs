//! League overview and standings.

use std::cmp::Ordering;

use tracing::info;

use crate::{
    espn::FantasyDataSource,
    models::{
        output::{LeagueInfo, StandingRow, StandingsReport},
        League, Team,
    },
    session::Session,
    Result,
};

pub async fn get_league_info(
    source: &dyn FantasyDataSource,
    session: &Session,
) -> Result<LeagueInfo> {
    info!(league_id = %session.league_id, season = %session.season, "get_league_info");

    let league = source.fetch_league(session, None).await?;
    Ok(LeagueInfo {
        league_id: league.id,
        season: league.season,
        name: league.name.clone(),
        scoring_type: league.scoring_type.clone(),
        current_week: league.current_week,
        nfl_week: league.nfl_week,
        final_week: league.final_week,
        regular_season_weeks: league.regular_season_weeks,
        playoff_team_count: league.playoff_team_count,
        team_count: league.teams().len(),
        teams: league.teams().iter().map(|t| t.name.clone()).collect(),
    })
}

pub async fn get_standings(
    source: &dyn FantasyDataSource,
    session: &Session,
) -> Result<StandingsReport> {
    info!(league_id = %session.league_id, season = %session.season, "get_standings");

    let league = source.fetch_league(session, None).await?;
    Ok(StandingsReport {
        league_id: league.id,
        season: league.season,
        standings: standings(&league),
    })
}

/// Rank teams by wins, then points for. Equal teams keep league order.
pub fn standings(league: &League) -> Vec<StandingRow> {
    let mut teams: Vec<&Team> = league.teams().iter().collect();
    teams.sort_by(|a, b| by_record(a, b));

    teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| StandingRow {
            rank: i + 1,
            team_id: team.id,
            name: team.name.clone(),
            owner: team.owner_name(),
            wins: team.record.wins,
            losses: team.record.losses,
            ties: team.record.ties,
            points_for: team.record.points_for,
            points_against: team.record.points_against,
            playoff_seed: team.playoff_seed,
        })
        .collect()
}

fn by_record(a: &Team, b: &Team) -> Ordering {
    b.record
        .wins
        .cmp(&a.record.wins)
        .then_with(|| b.record.points_for.total_cmp(&a.record.points_for))
}
