//! In-memory league fixtures for command tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    espn::{
        ingest::{box_scores_from_raw, league_from_raw},
        FantasyDataSource,
    },
    models::{BoxScore, League},
    session::Session,
    EspnError, LeagueId, Result, Season, Week,
};

pub(crate) const LEAGUE_ID: u32 = 123456;
pub(crate) const SEASON: u16 = 2024;

fn stat_row(period: u16, source: u8, total: f64) -> Value {
    let split: u8 = if period == 0 { 0 } else { 1 };
    json!({
        "seasonId": SEASON,
        "scoringPeriodId": period,
        "statSourceId": source,
        "statSplitTypeId": split,
        "appliedTotal": total,
        "stats": { "42": total * 4.0 }
    })
}

fn entry(id: i64, name: &str, position: i32, pro_team: i32, slot: i32, week6: f64) -> Value {
    json!({
        "playerId": id,
        "lineupSlotId": slot,
        "playerPoolEntry": {
            "appliedStatTotal": week6,
            "player": {
                "id": id,
                "fullName": name,
                "defaultPositionId": position,
                "proTeamId": pro_team,
                "injuryStatus": "ACTIVE",
                "stats": [
                    stat_row(0, 0, week6 * 5.0),
                    stat_row(0, 1, week6 * 15.0),
                    stat_row(6, 0, week6),
                    stat_row(6, 1, week6 + 1.0)
                ]
            }
        }
    })
}

/// Add next week's projection row to a roster entry.
fn with_projection(mut entry: Value, period: u16, points: f64) -> Value {
    if let Some(stats) = entry["playerPoolEntry"]["player"]["stats"].as_array_mut() {
        stats.push(stat_row(period, 1, points));
    }
    entry
}

pub(crate) fn league_json() -> Value {
    json!({
        "id": LEAGUE_ID,
        "seasonId": SEASON,
        "scoringPeriodId": 7,
        "status": { "finalScoringPeriod": 17, "latestScoringPeriod": 7 },
        "settings": {
            "name": "Sunday Funday",
            "scoringSettings": { "scoringType": "H2H_POINTS" },
            "scheduleSettings": { "matchupPeriodCount": 14, "playoffTeamCount": 4 }
        },
        "members": [
            { "id": "{GUID-1}", "firstName": "John", "lastName": "Doe", "displayName": "jdoe42" },
            { "id": "{GUID-2}", "firstName": "Jane", "lastName": "Roe", "displayName": "janer" },
            { "id": "{GUID-3}", "firstName": "Alex", "lastName": "Smith" }
        ],
        "teams": [
            {
                "id": 3,
                "name": "Gridiron Gurus",
                "owners": ["{GUID-1}"],
                "record": { "overall": { "wins": 5, "losses": 1, "pointsFor": 700.5, "pointsAgainst": 610.0 } },
                "playoffSeed": 2,
                "roster": { "entries": [
                    entry(4262921, "Justin Jefferson", 3, 16, 4, 21.7),
                    entry(3139477, "Patrick Mahomes", 1, 12, 0, 18.2),
                    entry(4430807, "Bijan Robinson", 2, 1, 20, 9.5)
                ] }
            },
            {
                "id": 5,
                "name": "Team 404",
                "owners": ["{GUID-3}"],
                "record": { "overall": { "wins": 3, "losses": 3, "pointsFor": 640.0, "pointsAgainst": 655.0 } },
                "playoffSeed": 4,
                "roster": { "entries": [
                    entry(3918298, "Josh Allen", 1, 2, 0, 25.0)
                ] }
            },
            {
                "id": 7,
                "name": "Team Seven",
                "owners": ["{GUID-2}"],
                "record": { "overall": { "wins": 5, "losses": 1, "pointsFor": 720.25, "pointsAgainst": 600.0 } },
                "playoffSeed": 1,
                "roster": { "entries": [
                    with_projection(entry(3116406, "Tyreek Hill", 3, 15, 4, 15.0), 8, 17.5),
                    entry(3043078, "Derrick Henry", 2, 33, 2, 12.3)
                ] }
            }
        ],
        "schedule": [
            {
                "id": 1,
                "matchupPeriodId": 5,
                "winner": "AWAY",
                "home": { "teamId": 3, "totalPoints": 90.0 },
                "away": { "teamId": 5, "totalPoints": 95.0 }
            },
            {
                "id": 2,
                "matchupPeriodId": 6,
                "winner": "HOME",
                "home": { "teamId": 3, "totalPoints": 39.9 },
                "away": { "teamId": 7, "totalPoints": 27.3 }
            },
            {
                "id": 3,
                "matchupPeriodId": 6,
                "winner": "UNDECIDED",
                "home": { "teamId": 5, "totalPoints": 0.0 }
            }
        ]
    })
}

pub(crate) fn box_scores_json() -> Value {
    json!({
        "schedule": [
            {
                "id": 16,
                "matchupPeriodId": 6,
                "home": {
                    "teamId": 3,
                    "totalPoints": 39.9,
                    "rosterForCurrentScoringPeriod": { "entries": [
                        entry(4262921, "Justin Jefferson", 3, 16, 4, 21.7),
                        entry(3139477, "Patrick Mahomes", 1, 12, 0, 18.2),
                        entry(4430807, "Bijan Robinson", 2, 1, 20, 9.5)
                    ] }
                },
                "away": {
                    "teamId": 7,
                    "totalPoints": 27.3,
                    "rosterForCurrentScoringPeriod": { "entries": [
                        entry(3116406, "Tyreek Hill", 3, 15, 4, 15.0),
                        entry(3043078, "Derrick Henry", 2, 33, 2, 12.3)
                    ] }
                }
            },
            {
                "id": 17,
                "matchupPeriodId": 6,
                "home": {
                    "teamId": 5,
                    "totalPoints": 0.0,
                    "rosterForCurrentScoringPeriod": { "entries": [
                        entry(3918298, "Josh Allen", 1, 2, 0, 25.0)
                    ] }
                }
            },
            {
                "id": 13,
                "matchupPeriodId": 5,
                "home": { "teamId": 3, "totalPoints": 90.0 },
                "away": { "teamId": 5, "totalPoints": 95.0 }
            }
        ]
    })
}

pub(crate) fn sample_league() -> League {
    league_from_raw(
        serde_json::from_value(league_json()).unwrap(),
        LeagueId::new(LEAGUE_ID),
        Season::new(SEASON),
    )
    .unwrap()
}

pub(crate) fn session() -> Session {
    Session {
        league_id: LeagueId::new(LEAGUE_ID),
        season: Season::new(SEASON),
        credentials: None,
    }
}

/// Serves the fixtures above and records what was asked for.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub(crate) private: bool,
    pub(crate) league_requests: Mutex<Vec<Option<Week>>>,
    pub(crate) box_score_requests: Mutex<Vec<(u16, Week)>>,
}

impl FakeSource {
    pub(crate) fn private() -> Self {
        Self {
            private: true,
            ..Self::default()
        }
    }

    fn check_access(&self, session: &Session) -> Result<()> {
        if self.private && !session.is_authenticated() {
            return Err(EspnError::NotAuthenticated {
                league_id: session.league_id.as_u32(),
                credentials_sent: false,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FantasyDataSource for FakeSource {
    async fn fetch_league(
        &self,
        session: &Session,
        scoring_period: Option<Week>,
    ) -> Result<League> {
        self.check_access(session)?;
        self.league_requests.lock().unwrap().push(scoring_period);
        league_from_raw(
            serde_json::from_value(league_json())?,
            session.league_id,
            session.season,
        )
    }

    async fn fetch_box_scores(
        &self,
        session: &Session,
        matchup_period: u16,
        week: Week,
    ) -> Result<Vec<BoxScore>> {
        self.check_access(session)?;
        self.box_score_requests
            .lock()
            .unwrap()
            .push((matchup_period, week));
        box_scores_from_raw(
            serde_json::from_value(box_scores_json())?,
            session.season,
            matchup_period,
            week,
        )
    }
}
