//! Weekly pairings and head-to-head matchup detail.

use tracing::{debug, info};

use crate::{
    commands::{
        common::{resolve_week, team_label},
        team_lookup::{find_team, MatchPolicy},
    },
    espn::FantasyDataSource,
    models::{
        output::{LineupPlayer, MatchupDetail, MatchupSummary, MatchupTeam, TeamLineup, WeeklyMatchups},
        BoxScore, League, MatchupSide, Team,
    },
    session::Session,
    EspnError, Result, Week,
};

/// Every pairing of one week.
pub async fn get_weekly_matchups(
    source: &dyn FantasyDataSource,
    session: &Session,
    week: Option<i64>,
) -> Result<WeeklyMatchups> {
    info!(league_id = %session.league_id, season = %session.season, week, "get_weekly_matchups");

    let league = source.fetch_league(session, None).await?;
    let week = resolve_week(&league, week)?;
    let matchup_period = league.matchup_period_for(week);
    let scores = source
        .fetch_box_scores(session, matchup_period, week)
        .await?;

    let matchups = scores
        .iter()
        .map(|score| MatchupSummary {
            home: matchup_team(&league, &score.home),
            away: score
                .away
                .as_ref()
                .map(|away| matchup_team(&league, away))
                .unwrap_or_else(MatchupTeam::bye),
            winner: score.winner(),
        })
        .collect();

    Ok(WeeklyMatchups {
        league_id: league.id,
        season: league.season,
        week,
        matchup_period,
        matchups,
    })
}

/// Side-by-side lineups of two teams for one week.
///
/// The week is validated before either team is resolved, so a bad week
/// fails the same way whatever the team queries are.
pub async fn get_detailed_matchup_info(
    source: &dyn FantasyDataSource,
    session: &Session,
    week: Option<i64>,
    team_a_query: &str,
    team_b_query: &str,
    policy: MatchPolicy,
) -> Result<MatchupDetail> {
    info!(
        league_id = %session.league_id,
        season = %session.season,
        week,
        team_a_query,
        team_b_query,
        "get_detailed_matchup_info"
    );

    let league = source.fetch_league(session, None).await?;
    let week = resolve_week(&league, week)?;

    let (team_a, _) = find_team(&league, team_a_query, policy)?;
    let (team_b, _) = find_team(&league, team_b_query, policy)?;
    if team_a.id == team_b.id {
        return Err(EspnError::invalid_input(format!(
            "'{}' and '{}' both resolve to {}",
            team_a_query.trim(),
            team_b_query.trim(),
            team_a.name
        )));
    }

    let matchup_period = league.matchup_period_for(week);
    let scores = source
        .fetch_box_scores(session, matchup_period, week)
        .await?;
    debug!(matchup_period, box_scores = scores.len(), "box scores loaded");

    let shared = scores
        .iter()
        .find(|s| s.involves(team_a.id) && s.involves(team_b.id));

    Ok(MatchupDetail {
        league_id: league.id,
        season: league.season,
        week,
        matchup_period,
        team_a: team_lineup(team_a, &scores, week),
        team_b: team_lineup(team_b, &scores, week),
        head_to_head: shared.is_some(),
        winner: shared.map(BoxScore::winner),
        winning_team_id: shared.and_then(BoxScore::winning_team),
    })
}

fn matchup_team(league: &League, side: &MatchupSide) -> MatchupTeam {
    let team = league.team(side.team_id);
    MatchupTeam {
        team_id: Some(side.team_id),
        name: team_label(league, team, side.team_id.as_u32()),
        owner: team.and_then(Team::owner_name),
        score: side.score,
        projected_score: side.projected_score,
    }
}

/// A team without an opponent this week is on bye: empty lineup, score 0.
fn team_lineup(team: &Team, scores: &[BoxScore], week: Week) -> TeamLineup {
    let game = scores
        .iter()
        .find_map(|s| s.side_of(team.id).map(|side| (s, side)));

    let (score, projected_score, side, lineup) = match game {
        Some((box_score, (mine, Some(_)))) => (
            mine.score,
            mine.projected_score,
            Some(if box_score.home.team_id == team.id {
                "HOME"
            } else {
                "AWAY"
            }),
            mine.lineup
                .iter()
                .map(|p| LineupPlayer::from_player(p, week))
                .collect(),
        ),
        _ => (0.0, None, None, Vec::new()),
    };

    TeamLineup {
        team_id: team.id,
        name: team.name.clone(),
        owner: team.owner_name(),
        score,
        projected_score,
        on_bye: side.is_none(),
        side,
        lineup,
    }
}
