//! Validated league records.
//!
//! Everything the query layer touches is one of these types. They are built
//! once from the ESPN payload in [`crate::espn::ingest`] and never mutated by
//! the tools afterwards.

pub mod output;
pub mod stat_source;

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{LeagueId, LineupSlot, PlayerId, Position, Season, TeamId, Week};

/// Scoring period ESPN uses for season totals.
pub const SEASON_TOTAL_PERIOD: u16 = 0;

/// Final scoring period assumed when a payload does not say.
pub const DEFAULT_FINAL_WEEK: u16 = 17;

#[derive(Debug, Clone)]
pub struct League {
    pub id: LeagueId,
    pub season: Season,
    pub name: String,
    pub scoring_type: Option<String>,
    pub current_week: Week,
    pub nfl_week: Week,
    /// Last scoring period of the season; valid weeks are `1..=final_week`.
    pub final_week: u16,
    pub regular_season_weeks: Option<u16>,
    pub playoff_team_count: Option<u16>,
    /// Matchup period -> scoring periods it spans.
    pub matchup_periods: BTreeMap<u16, Vec<u16>>,
    teams: Vec<Team>,
    team_index: HashMap<TeamId, usize>,
}

impl League {
    pub fn new(id: LeagueId, season: Season, name: impl Into<String>) -> Self {
        Self {
            id,
            season,
            name: name.into(),
            scoring_type: None,
            current_week: Week::default(),
            nfl_week: Week::default(),
            final_week: DEFAULT_FINAL_WEEK,
            regular_season_weeks: None,
            playoff_team_count: None,
            matchup_periods: BTreeMap::new(),
            teams: Vec::new(),
            team_index: HashMap::new(),
        }
    }

    /// Replace the teams, keeping ESPN's native ordering.
    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.team_index = teams
            .iter()
            .enumerate()
            .map(|(i, team)| (team.id, i))
            .collect();
        self.teams = teams;
        self
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.team_index.get(&id).map(|&i| &self.teams[i])
    }

    /// Matchup period containing `week`. Multi-week playoff rounds share one
    /// period; without a table the week is its own period.
    pub fn matchup_period_for(&self, week: Week) -> u16 {
        self.matchup_periods
            .iter()
            .find(|(_, weeks)| weeks.contains(&week.as_u16()))
            .map(|(period, _)| *period)
            .unwrap_or_else(|| week.as_u16())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Owner {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
}

impl Owner {
    /// "First Last", or whichever half is known.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Transactions {
    pub acquisitions: u32,
    pub drops: u32,
    pub trades: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbrev: Option<String>,
    pub owners: Vec<Owner>,
    pub record: Record,
    pub transactions: Transactions,
    pub playoff_seed: Option<u32>,
    pub final_standing: Option<u32>,
    pub playoff_pct: Option<f64>,
    pub roster: Vec<Player>,
    /// Every scheduled game, in matchup period order.
    pub schedule: Vec<GameResult>,
}

impl Team {
    /// The primary owner's full name.
    pub fn owner_name(&self) -> Option<String> {
        self.owners.first().and_then(Owner::full_name)
    }

    /// Every name an owner can be looked up by: full names and display names.
    pub fn owner_aliases(&self) -> Vec<String> {
        self.owners
            .iter()
            .flat_map(|o| [o.full_name(), o.display_name.clone()])
            .flatten()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchOutcome {
    Win,
    Loss,
    Tie,
    Undecided,
}

impl MatchOutcome {
    /// Read ESPN's `winner` field from one side's point of view.
    pub fn from_winner(winner: Option<&str>, home: bool) -> Self {
        match (winner, home) {
            (Some("HOME"), true) | (Some("AWAY"), false) => MatchOutcome::Win,
            (Some("HOME"), false) | (Some("AWAY"), true) => MatchOutcome::Loss,
            (Some("TIE"), _) => MatchOutcome::Tie,
            _ => MatchOutcome::Undecided,
        }
    }
}

/// One team's game in one matchup period. `opponent` is `None` on a bye.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    pub matchup_period: u16,
    pub opponent: Option<TeamId>,
    pub home: bool,
    pub score: f64,
    pub opponent_score: Option<f64>,
    pub outcome: MatchOutcome,
}

/// Actual and projected figures for one scoring period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_points: Option<f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub breakdown: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub projected_breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub pro_team: String,
    pub injury_status: Option<String>,
    pub injured: bool,
    pub lineup_slot: LineupSlot,
    /// Scoring period -> stat line. Period 0 holds season totals.
    pub stats: BTreeMap<u16, StatLine>,
}

impl Player {
    pub fn season_line(&self) -> Option<&StatLine> {
        self.stats.get(&SEASON_TOTAL_PERIOD)
    }

    pub fn week_line(&self, week: Week) -> Option<&StatLine> {
        self.stats.get(&week.as_u16())
    }

    /// Projection for the week after `week`, without actual figures.
    pub fn next_week_projection(&self, week: Week) -> Option<StatLine> {
        let line = self.stats.get(&(week.as_u16() + 1))?;
        line.projected_points.map(|projected| StatLine {
            points: None,
            projected_points: Some(projected),
            breakdown: BTreeMap::new(),
            projected_breakdown: line.projected_breakdown.clone(),
        })
    }

    pub fn total_points(&self) -> Option<f64> {
        self.season_line().and_then(|s| s.points)
    }

    pub fn projected_total_points(&self) -> Option<f64> {
        self.season_line().and_then(|s| s.projected_points)
    }
}

/// One team's half of a box score.
#[derive(Debug, Clone)]
pub struct MatchupSide {
    pub team_id: TeamId,
    pub score: f64,
    pub projected_score: Option<f64>,
    pub lineup: Vec<Player>,
}

#[derive(Debug, Clone)]
pub struct BoxScore {
    pub matchup_period: u16,
    pub home: MatchupSide,
    /// `None` on a bye.
    pub away: Option<MatchupSide>,
}

impl BoxScore {
    pub fn away_score(&self) -> f64 {
        self.away.as_ref().map(|a| a.score).unwrap_or(0.0)
    }

    /// Team id of the higher score, `None` on a tie.
    pub fn winning_team(&self) -> Option<TeamId> {
        match self.winner() {
            "HOME" => Some(self.home.team_id),
            "AWAY" => self.away.as_ref().map(|a| a.team_id),
            _ => None,
        }
    }

    /// "HOME", "AWAY" or "TIE" by score. A bye counts the away score as 0.
    pub fn winner(&self) -> &'static str {
        let away = self.away_score();
        if self.home.score > away {
            "HOME"
        } else if away > self.home.score {
            "AWAY"
        } else {
            "TIE"
        }
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home.team_id == team_id || self.away.as_ref().is_some_and(|a| a.team_id == team_id)
    }

    /// The given team's side and its opponent's side, if the team plays here.
    pub fn side_of(&self, team_id: TeamId) -> Option<(&MatchupSide, Option<&MatchupSide>)> {
        if self.home.team_id == team_id {
            return Some((&self.home, self.away.as_ref()));
        }
        match &self.away {
            Some(away) if away.team_id == team_id => Some((away, Some(&self.home))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(id: u32, score: f64) -> MatchupSide {
        MatchupSide {
            team_id: TeamId::new(id),
            score,
            projected_score: None,
            lineup: Vec::new(),
        }
    }

    #[test]
    fn test_owner_full_name() {
        let owner = Owner {
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            display_name: Some("jdoe42".into()),
        };
        assert_eq!(owner.full_name().as_deref(), Some("John Doe"));

        let half = Owner {
            first_name: Some("Cher".into()),
            last_name: Some("  ".into()),
            display_name: None,
        };
        assert_eq!(half.full_name().as_deref(), Some("Cher"));
        assert_eq!(Owner::default().full_name(), None);
    }

    #[test]
    fn test_team_owner_aliases() {
        let team = Team {
            owners: vec![
                Owner {
                    first_name: Some("John".into()),
                    last_name: Some("Doe".into()),
                    display_name: Some("jdoe42".into()),
                },
                Owner {
                    first_name: Some("Jane".into()),
                    last_name: Some("Roe".into()),
                    display_name: None,
                },
            ],
            ..Team::default()
        };

        assert_eq!(team.owner_name().as_deref(), Some("John Doe"));
        assert_eq!(team.owner_aliases(), vec!["John Doe", "jdoe42", "Jane Roe"]);
    }

    #[test]
    fn test_league_team_index_and_matchup_periods() {
        let mut league = League::new(LeagueId::new(1), Season::new(2024), "Test");
        league.matchup_periods.insert(15, vec![15]);
        league.matchup_periods.insert(16, vec![16, 17]);
        let league = league.with_teams(vec![
            Team {
                id: TeamId::new(4),
                name: "Four".into(),
                ..Team::default()
            },
            Team {
                id: TeamId::new(9),
                name: "Nine".into(),
                ..Team::default()
            },
        ]);

        assert_eq!(league.team(TeamId::new(9)).unwrap().name, "Nine");
        assert!(league.team(TeamId::new(1)).is_none());

        assert_eq!(league.matchup_period_for(Week::new(3)), 3);
        assert_eq!(league.matchup_period_for(Week::new(15)), 15);
        assert_eq!(league.matchup_period_for(Week::new(17)), 16);
    }

    #[test]
    fn test_box_score_winner_and_sides() {
        let game = BoxScore {
            matchup_period: 6,
            home: side(3, 101.5),
            away: Some(side(7, 99.0)),
        };
        assert_eq!(game.winner(), "HOME");
        assert_eq!(game.winning_team(), Some(TeamId::new(3)));
        assert!(game.involves(TeamId::new(7)));

        let (mine, theirs) = game.side_of(TeamId::new(7)).unwrap();
        assert_eq!(mine.score, 99.0);
        assert_eq!(theirs.unwrap().team_id, TeamId::new(3));
        assert!(game.side_of(TeamId::new(1)).is_none());

        let bye = BoxScore {
            matchup_period: 6,
            home: side(5, 0.0),
            away: None,
        };
        assert_eq!(bye.winner(), "TIE");
        assert_eq!(bye.winning_team(), None);
        assert_eq!(bye.away_score(), 0.0);
        assert!(bye.side_of(TeamId::new(5)).unwrap().1.is_none());

        let away_win = BoxScore {
            matchup_period: 7,
            home: side(3, 80.0),
            away: Some(side(7, 95.5)),
        };
        assert_eq!(away_win.winning_team(), Some(TeamId::new(7)));
    }

    #[test]
    fn test_match_outcome_from_winner() {
        assert_eq!(MatchOutcome::from_winner(Some("HOME"), true), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_winner(Some("HOME"), false), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::from_winner(Some("AWAY"), false), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_winner(Some("TIE"), true), MatchOutcome::Tie);
        assert_eq!(MatchOutcome::from_winner(Some("UNDECIDED"), true), MatchOutcome::Undecided);
        assert_eq!(MatchOutcome::from_winner(None, false), MatchOutcome::Undecided);
        assert_eq!(serde_json::to_value(MatchOutcome::Win).unwrap(), "WIN");
    }

    #[test]
    fn test_next_week_projection_drops_actuals() {
        let mut player = Player {
            id: PlayerId::new(1),
            name: "Someone".into(),
            position: Position::QB,
            pro_team: "KC".into(),
            injury_status: None,
            injured: false,
            lineup_slot: LineupSlot(0),
            stats: BTreeMap::new(),
        };
        player.stats.insert(
            8,
            StatLine {
                points: Some(3.0),
                projected_points: Some(19.5),
                breakdown: BTreeMap::from([("passingYards".to_string(), 40.0)]),
                projected_breakdown: BTreeMap::from([("passingYards".to_string(), 275.0)]),
            },
        );

        let next = player.next_week_projection(Week::new(7)).unwrap();
        assert_eq!(next.points, None);
        assert_eq!(next.projected_points, Some(19.5));
        assert!(next.breakdown.is_empty());
        assert_eq!(next.projected_breakdown["passingYards"], 275.0);

        assert!(player.next_week_projection(Week::new(8)).is_none());
    }
}
