//! Player stat lookups across every roster in the league.

use tracing::{debug, info};

use crate::{
    commands::common::MAX_SCORING_PERIOD,
    espn::FantasyDataSource,
    models::{output::PlayerStatsReport, League, Player, Team},
    session::Session,
    EspnError, Result, Week,
};

/// Find a rostered player by name and report their stats.
///
/// Matching is a case-insensitive substring of the player's full name and the
/// first hit in league order wins. With `week`, the league is fetched for that
/// scoring period and only that week's line is returned.
pub async fn get_player_stats(
    source: &dyn FantasyDataSource,
    session: &Session,
    player_name: &str,
    week: Option<i64>,
) -> Result<PlayerStatsReport> {
    info!(
        league_id = %session.league_id,
        season = %session.season,
        player_name,
        week,
        "get_player_stats"
    );

    let needle = player_name.trim().to_lowercase();
    if needle.is_empty() {
        return Err(EspnError::invalid_input("player name must not be empty"));
    }

    // Cheap bound first so obviously bad weeks never reach ESPN.
    let requested = week
        .map(|w| Week::checked(w, MAX_SCORING_PERIOD))
        .transpose()?;

    let league = source.fetch_league(session, requested).await?;
    let week = week
        .map(|w| Week::checked(w, league.final_week))
        .transpose()?;

    let (team, player) =
        find_player(&league, &needle).ok_or_else(|| EspnError::PlayerNotFound {
            name: player_name.trim().to_string(),
        })?;
    debug!(player = %player.name, team = %team.name, "player matched");

    let stats = match week {
        Some(w) => player
            .stats
            .iter()
            .filter(|(period, _)| **period == w.as_u16())
            .map(|(period, line)| (*period, line.clone()))
            .collect(),
        None => player.stats.clone(),
    };

    Ok(PlayerStatsReport {
        league_id: league.id,
        season: league.season,
        team_id: team.id,
        team_name: team.name.clone(),
        player_id: player.id,
        name: player.name.clone(),
        position: player.position,
        pro_team: player.pro_team.clone(),
        injury_status: player.injury_status.clone(),
        injured: player.injured,
        total_points: player.total_points(),
        projected_total_points: player.projected_total_points(),
        week,
        stats,
    })
}

fn find_player<'a>(league: &'a League, needle: &str) -> Option<(&'a Team, &'a Player)> {
    league.teams().iter().find_map(|team| {
        team.roster
            .iter()
            .find(|p| p.name.to_lowercase().contains(needle))
            .map(|p| (team, p))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{session, FakeSource};

    #[tokio::test]
    async fn test_get_player_stats_all_weeks() {
        let source = FakeSource::default();
        let report = get_player_stats(&source, &session(), "jefferson", None)
            .await
            .unwrap();

        assert_eq!(report.name, "Justin Jefferson");
        assert_eq!(report.team_name, "Gridiron Gurus");
        assert_eq!(report.total_points, Some(108.5));
        assert!(report.week.is_none());
        assert_eq!(report.stats.keys().copied().collect::<Vec<_>>(), vec![0u16, 6]);
        assert_eq!(source.league_requests.lock().unwrap()[0], None);
    }

    #[tokio::test]
    async fn test_get_player_stats_single_week() {
        let source = FakeSource::default();
        let report = get_player_stats(&source, &session(), "  JOSH allen ", Some(6))
            .await
            .unwrap();

        assert_eq!(report.name, "Josh Allen");
        assert_eq!(report.week, Some(Week::new(6)));
        assert_eq!(report.stats.len(), 1);
        assert_eq!(report.stats[&6u16].points, Some(25.0));
        assert_eq!(
            source.league_requests.lock().unwrap()[0],
            Some(Week::new(6))
        );
    }

    #[tokio::test]
    async fn test_first_match_in_league_order_wins() {
        let source = FakeSource::default();
        // Mahomes on team 3 is listed before Allen on team 5
        let report = get_player_stats(&source, &session(), "a", None)
            .await
            .unwrap();
        assert_eq!(report.name, "Patrick Mahomes");
    }

    #[tokio::test]
    async fn test_get_player_stats_errors() {
        let source = FakeSource::default();

        let err = get_player_stats(&source, &session(), "   ", None)
            .await
            .unwrap_err();
        assert!(matches!(err, EspnError::InvalidInput { .. }));

        let err = get_player_stats(&source, &session(), "Nobody", None)
            .await
            .unwrap_err();
        assert!(matches!(err, EspnError::PlayerNotFound { .. }));

        let err = get_player_stats(&source, &session(), "Allen", Some(19))
            .await
            .unwrap_err();
        assert!(matches!(err, EspnError::InvalidWeek { week: 19, max: 18 }));

        // Week 18 passes the first bound but not this league's final week
        let err = get_player_stats(&source, &session(), "Allen", Some(18))
            .await
            .unwrap_err();
        assert!(matches!(err, EspnError::InvalidWeek { week: 18, max: 17 }));

        // The blank name and week 19 never reached the source
        assert_eq!(source.league_requests.lock().unwrap().len(), 2);
    }
}
