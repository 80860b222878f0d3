//! Team lookups: roster, profile and resolver output.

use tracing::info;

use crate::{
    commands::team_lookup::{find_team, MatchPolicy},
    espn::FantasyDataSource,
    models::output::{RosterPlayer, RosterReport, TeamInfo, TeamMatch},
    session::Session,
    Result,
};

pub async fn get_team_roster(
    source: &dyn FantasyDataSource,
    session: &Session,
    team_query: &str,
    policy: MatchPolicy,
) -> Result<RosterReport> {
    info!(league_id = %session.league_id, season = %session.season, team_query, "get_team_roster");

    let league = source.fetch_league(session, None).await?;
    let (team, _) = find_team(&league, team_query, policy)?;

    Ok(RosterReport {
        league_id: league.id,
        season: league.season,
        team_id: team.id,
        team_name: team.name.clone(),
        owner: team.owner_name(),
        record: team.record,
        current_week: league.current_week,
        players: team
            .roster
            .iter()
            .map(|p| RosterPlayer::from_player(p, league.current_week))
            .collect(),
    })
}

pub async fn get_team_info(
    source: &dyn FantasyDataSource,
    session: &Session,
    team_query: &str,
    policy: MatchPolicy,
) -> Result<TeamInfo> {
    info!(league_id = %session.league_id, season = %session.season, team_query, "get_team_info");

    let league = source.fetch_league(session, None).await?;
    let (team, _) = find_team(&league, team_query, policy)?;
    Ok(TeamInfo::new(league.id, league.season, team))
}

pub async fn lookup_team(
    source: &dyn FantasyDataSource,
    session: &Session,
    query: &str,
    policy: MatchPolicy,
) -> Result<TeamMatch> {
    info!(league_id = %session.league_id, season = %session.season, query, "find_team");

    let league = source.fetch_league(session, None).await?;
    let (team, strategy) = find_team(&league, query, policy)?;
    Ok(TeamMatch {
        league_id: league.id,
        season: league.season,
        team_id: team.id,
        name: team.name.clone(),
        owner: team.owner_name(),
        matched_by: strategy.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::fixtures::{session, FakeSource},
        models::MatchOutcome,
        EspnError, Position, TeamId, Week,
    };

    #[tokio::test]
    async fn test_get_team_roster_by_owner() {
        let source = FakeSource::default();
        let report = get_team_roster(&source, &session(), "jane roe", MatchPolicy::Strict)
            .await
            .unwrap();

        assert_eq!(report.team_id, TeamId::new(7));
        assert_eq!(report.team_name, "Team Seven");
        assert_eq!(report.owner.as_deref(), Some("Jane Roe"));
        assert_eq!(report.record.wins, 5);
        assert_eq!(report.players.len(), 2);

        let hill = &report.players[0];
        assert_eq!(hill.name, "Tyreek Hill");
        assert_eq!(hill.position, Position::WR);
        assert_eq!(hill.total_points, Some(75.0));
        assert_eq!(hill.projected_total_points, Some(225.0));
        assert!(!hill.injured);
        // Fixture only carries week 6 lines; the current week is 7
        assert_eq!(report.current_week, Week::new(7));
        assert!(hill.current_week_stats.is_none());
        assert!(hill.season_stats.is_some());

        let next = hill.next_week_projected_stats.as_ref().unwrap();
        assert_eq!(next.projected_points, Some(17.5));
        assert_eq!(next.points, None);
        assert!(report.players[1].next_week_projected_stats.is_none());
    }

    #[tokio::test]
    async fn test_get_team_info_fields() {
        let source = FakeSource::default();
        let info = get_team_info(&source, &session(), "3", MatchPolicy::FirstMatch)
            .await
            .unwrap();

        assert_eq!(info.name, "Gridiron Gurus");
        assert_eq!(info.owners.len(), 1);
        assert_eq!(info.record.points_for, 700.5);
        assert_eq!(info.playoff_seed, Some(2));

        assert_eq!(info.outcomes.len(), 2);
        let week5 = &info.outcomes[0];
        assert_eq!(week5.matchup_period, 5);
        assert_eq!(week5.opponent, Some(TeamId::new(5)));
        assert_eq!(week5.outcome, MatchOutcome::Loss);
        let week6 = &info.outcomes[1];
        assert_eq!(week6.outcome, MatchOutcome::Win);
        assert_eq!(week6.score, 39.9);
        assert_eq!(week6.opponent_score, Some(27.3));
    }

    #[tokio::test]
    async fn test_get_team_info_bye_outcome() {
        let source = FakeSource::default();
        let info = get_team_info(&source, &session(), "Team 404", MatchPolicy::Strict)
            .await
            .unwrap();

        let bye = &info.outcomes[1];
        assert_eq!(bye.matchup_period, 6);
        assert_eq!(bye.opponent, None);
        assert_eq!(bye.outcome, MatchOutcome::Undecided);
        assert_eq!(info.outcomes[0].outcome, MatchOutcome::Win);
    }

    #[tokio::test]
    async fn test_lookup_team_reports_strategy() {
        let source = FakeSource::default();

        let by_id = lookup_team(&source, &session(), "5", MatchPolicy::Strict)
            .await
            .unwrap();
        assert_eq!(by_id.matched_by, "id");
        assert_eq!(by_id.name, "Team 404");

        let by_owner = lookup_team(&source, &session(), "JDOE42", MatchPolicy::Strict)
            .await
            .unwrap();
        assert_eq!(by_owner.matched_by, "owner");
        assert_eq!(by_owner.team_id, TeamId::new(3));
    }

    #[tokio::test]
    async fn test_unknown_team_is_not_found() {
        let source = FakeSource::default();
        let err = get_team_roster(&source, &session(), "Nobody FC", MatchPolicy::FirstMatch)
            .await
            .unwrap_err();
        assert!(matches!(err, EspnError::TeamNotFound { .. }));
    }
}
