//! Turn ESPN wire payloads into validated [`crate::models`] records.
//!
//! This is the only place that knows which optional ESPN fields fall back to
//! what. Payloads that cannot be made sense of fail with
//! [`EspnError::MalformedResponse`] instead of leaking half-filled records.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::{
    espn::{
        stat_names::named_breakdown,
        types::{
            RawLeague, RawMatchupTeam, RawMember, RawPlayerStats, RawRosterEntry,
            RawScheduleItem, RawTeam,
        },
    },
    models::{
        stat_source::StatSource, BoxScore, GameResult, League, MatchOutcome, MatchupSide, Owner,
        Player, Record, StatLine, Team, Transactions, DEFAULT_FINAL_WEEK,
    },
    pro_team_abbrev, EspnError, LeagueId, LineupSlot, PlayerId, Position, Result, Season, TeamId,
    Week,
};


/// Build a [`League`] from the `mTeam`/`mRoster`/`mSettings` views.
pub fn league_from_raw(raw: RawLeague, league_id: LeagueId, season: Season) -> Result<League> {
    let members: HashMap<&str, &RawMember> =
        raw.members.iter().map(|m| (m.id.as_str(), m)).collect();

    let final_week = raw
        .status
        .final_scoring_period
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_FINAL_WEEK);

    let current_week = match raw.scoring_period_id {
        Some(p) if p >= 1 => p.min(final_week),
        _ => raw.status.current_matchup_period.unwrap_or(1).max(1),
    };
    let nfl_week = raw
        .status
        .latest_scoring_period
        .filter(|w| *w > 0)
        .unwrap_or(current_week);

    let name = raw
        .settings
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("League {}", league_id));

    let mut seen = HashSet::new();
    let mut teams = Vec::with_capacity(raw.teams.len());
    for raw_team in &raw.teams {
        if !seen.insert(raw_team.id) {
            return Err(EspnError::malformed(format!(
                "team id {} appears twice",
                raw_team.id
            )));
        }
        teams.push(team_from_raw(raw_team, &members, season)?);
    }
    attach_schedule(&mut teams, &raw.schedule);

    let mut league = League::new(league_id, season, name);
    league.current_week = Week::new(current_week);
    league.nfl_week = Week::new(nfl_week);
    league.final_week = final_week;
    if let Some(settings) = &raw.settings {
        league.scoring_type = settings.scoring_settings.scoring_type.clone();
        league.regular_season_weeks = settings.schedule_settings.matchup_period_count;
        league.playoff_team_count = settings.schedule_settings.playoff_team_count;
        league.matchup_periods = settings.schedule_settings.matchup_periods.clone();
    }

    Ok(league.with_teams(teams))
}

/// Build the box scores of one matchup period from the `mMatchupScore`/`mScoreboard` views.
pub fn box_scores_from_raw(
    raw: RawLeague,
    season: Season,
    matchup_period: u16,
    week: Week,
) -> Result<Vec<BoxScore>> {
    let mut scores = Vec::new();
    for item in raw.schedule {
        if item.matchup_period_id != matchup_period {
            continue;
        }
        let Some(home) = item.home else {
            debug!(matchup = ?item.id, "skipping schedule entry without a home team");
            continue;
        };
        scores.push(BoxScore {
            matchup_period,
            home: side_from_raw(&home, season, week)?,
            away: item
                .away
                .as_ref()
                .map(|away| side_from_raw(away, season, week))
                .transpose()?,
        });
    }
    Ok(scores)
}

/// Give each team its games from the `mMatchup` schedule, ordered by period.
fn attach_schedule(teams: &mut [Team], schedule: &[RawScheduleItem]) {
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.id, i))
        .collect();

    for item in schedule {
        let Some(home) = &item.home else {
            continue;
        };
        let away = item.away.as_ref();
        let sides = [(Some(home), away, true), (away, Some(home), false)];
        for (mine, theirs, is_home) in sides {
            let Some(mine) = mine else {
                continue;
            };
            let Some(&i) = index.get(&TeamId::new(mine.team_id)) else {
                debug!(team_id = mine.team_id, "schedule entry for unknown team");
                continue;
            };
            teams[i].schedule.push(GameResult {
                matchup_period: item.matchup_period_id,
                opponent: theirs.map(|t| TeamId::new(t.team_id)),
                home: is_home,
                score: mine.total_points,
                opponent_score: theirs.map(|t| t.total_points),
                outcome: MatchOutcome::from_winner(item.winner.as_deref(), is_home),
            });
        }
    }

    for team in teams.iter_mut() {
        team.schedule.sort_by_key(|game| game.matchup_period);
    }
}

fn team_from_raw(
    raw: &RawTeam,
    members: &HashMap<&str, &RawMember>,
    season: Season,
) -> Result<Team> {
    let name = team_name(raw)
        .ok_or_else(|| EspnError::malformed(format!("team {} has no name", raw.id)))?;

    let owners = raw
        .owners
        .iter()
        .filter_map(|guid| members.get(guid.as_str()))
        .map(|m| Owner {
            first_name: m.first_name.clone(),
            last_name: m.last_name.clone(),
            display_name: m.display_name.clone(),
        })
        .collect();

    let overall = raw.record.overall.clone().unwrap_or_default();

    let roster = match &raw.roster {
        Some(roster) => roster
            .entries
            .iter()
            .map(|entry| player_from_entry(entry, season))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Team {
        id: TeamId::new(raw.id),
        name,
        abbrev: raw.abbrev.clone(),
        owners,
        record: Record {
            wins: overall.wins,
            losses: overall.losses,
            ties: overall.ties,
            points_for: overall.points_for,
            points_against: overall.points_against,
        },
        transactions: Transactions {
            acquisitions: raw.transaction_counter.acquisitions,
            drops: raw.transaction_counter.drops,
            trades: raw.transaction_counter.trades,
        },
        playoff_seed: raw.playoff_seed,
        final_standing: raw.rank_calculated_final.filter(|r| *r > 0),
        playoff_pct: raw
            .current_simulation_results
            .as_ref()
            .and_then(|s| s.playoff_pct),
        roster,
        schedule: Vec::new(),
    })
}

/// Team names are trimmed; ESPN happily stores trailing spaces.
fn team_name(raw: &RawTeam) -> Option<String> {
    if let Some(name) = raw.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return Some(name.to_string());
    }
    let joined = [raw.location.as_deref(), raw.nickname.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

fn player_from_entry(entry: &RawRosterEntry, season: Season) -> Result<Player> {
    let pool = entry.player_pool_entry.as_ref().ok_or_else(|| {
        EspnError::malformed(format!(
            "roster entry for player {} has no player details",
            entry.player_id
        ))
    })?;
    let p = &pool.player;

    let name = p
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| EspnError::malformed(format!("player {} has no name", p.id)))?
        .to_string();

    let injury_status = p.injury_status.clone().or_else(|| entry.injury_status.clone());
    let injured = p.injured.unwrap_or_else(|| {
        injury_status
            .as_deref()
            .is_some_and(|s| !matches!(s, "ACTIVE" | "NORMAL"))
    });

    Ok(Player {
        id: PlayerId::new(p.id),
        name,
        position: Position::from_default_position_id(p.default_position_id),
        pro_team: pro_team_abbrev(p.pro_team_id).to_string(),
        injury_status,
        injured,
        lineup_slot: LineupSlot(entry.lineup_slot_id),
        stats: stat_lines(&p.stats, season),
    })
}

/// Group raw stat rows by scoring period, keeping season totals (split 0 at
/// period 0) and weekly lines (split 1).
fn stat_lines(raw: &[RawPlayerStats], season: Season) -> BTreeMap<u16, StatLine> {
    let mut lines: BTreeMap<u16, StatLine> = BTreeMap::new();
    for row in raw {
        if row.season_id != season.as_u16() {
            continue;
        }
        let expected_split = if row.scoring_period_id == 0 { 0 } else { 1 };
        if row.stat_split_type_id != expected_split {
            continue;
        }
        let Some(source) = StatSource::from_id(row.stat_source_id) else {
            continue;
        };

        let line = lines.entry(row.scoring_period_id).or_default();
        match source {
            StatSource::Actual => {
                line.points = row.applied_total;
                line.breakdown = named_breakdown(&row.stats);
            }
            StatSource::Projected => {
                line.projected_points = row.applied_total;
                line.projected_breakdown = named_breakdown(&row.stats);
            }
        }
    }
    lines
}

fn side_from_raw(raw: &RawMatchupTeam, season: Season, week: Week) -> Result<MatchupSide> {
    let entries = raw
        .roster_for_current_scoring_period
        .as_ref()
        .map(|r| r.entries.as_slice())
        .unwrap_or_default();

    let mut lineup = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut player = player_from_entry(entry, season)?;
        // The pool entry carries the week's applied total even when the stat
        // rows are trimmed.
        if let Some(total) = entry
            .player_pool_entry
            .as_ref()
            .and_then(|p| p.applied_stat_total)
        {
            let line = player.stats.entry(week.as_u16()).or_default();
            line.points.get_or_insert(total);
        }
        lineup.push(player);
    }

    Ok(MatchupSide {
        team_id: TeamId::new(raw.team_id),
        score: raw.total_points_live.unwrap_or(raw.total_points),
        projected_score: raw.total_projected_points_live,
        lineup,
    })
}
