//! Team resolution by id, name or owner.
//!
//! Rules are tried in order and the first rule with any hit wins:
//! numeric id, exact team name, exact owner name, then a substring of the
//! team or owner name. All name comparisons ignore case.

use tracing::warn;

use crate::{
    models::{League, Team},
    EspnError, Result, TeamId,
};

/// What to do when one rule matches several teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Take the first team in league order and log a warning.
    #[default]
    FirstMatch,
    /// Fail with [`EspnError::AmbiguousMatch`].
    Strict,
}

/// The rule that resolved a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Id,
    ExactName,
    Owner,
    Partial,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::Id => "id",
            MatchStrategy::ExactName => "name",
            MatchStrategy::Owner => "owner",
            MatchStrategy::Partial => "partial",
        }
    }
}

/// Resolve `query` to a team of `league`.
///
/// # Errors
///
/// - [`EspnError::InvalidInput`] for a blank query
/// - [`EspnError::TeamNotFound`] when no rule matches
/// - [`EspnError::AmbiguousMatch`] under [`MatchPolicy::Strict`] when the
///   winning rule matches more than one team
pub fn find_team<'a>(
    league: &'a League,
    query: &str,
    policy: MatchPolicy,
) -> Result<(&'a Team, MatchStrategy)> {
    let query = query.trim();
    if query.is_empty() {
        return Err(EspnError::invalid_input("team query must not be empty"));
    }

    if let Ok(id) = query.parse::<u32>() {
        if let Some(team) = league.team(TeamId::new(id)) {
            return Ok((team, MatchStrategy::Id));
        }
    }

    let needle = query.to_lowercase();
    let rules: [(MatchStrategy, &dyn Fn(&Team) -> bool); 3] = [
        (MatchStrategy::ExactName, &|t: &Team| {
            t.name.to_lowercase() == needle
        }),
        (MatchStrategy::Owner, &|t: &Team| {
            t.owner_aliases().iter().any(|a| a.to_lowercase() == needle)
        }),
        (MatchStrategy::Partial, &|t: &Team| {
            t.name.to_lowercase().contains(&needle)
                || t
                    .owner_aliases()
                    .iter()
                    .any(|a| a.to_lowercase().contains(&needle))
        }),
    ];

    for (strategy, rule) in rules {
        let hits: Vec<&Team> = league.teams().iter().filter(|t| rule(*t)).collect();
        if let Some(team) = pick(query, hits, strategy, policy)? {
            return Ok((team, strategy));
        }
    }

    Err(EspnError::TeamNotFound {
        query: query.to_string(),
    })
}

fn pick<'a>(
    query: &str,
    hits: Vec<&'a Team>,
    strategy: MatchStrategy,
    policy: MatchPolicy,
) -> Result<Option<&'a Team>> {
    match hits.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        [first, ..] => {
            let candidates: Vec<String> = hits.iter().map(|t| t.name.clone()).collect();
            match policy {
                MatchPolicy::Strict => Err(EspnError::AmbiguousMatch {
                    query: query.to_string(),
                    candidates,
                }),
                MatchPolicy::FirstMatch => {
                    warn!(
                        query,
                        strategy = strategy.as_str(),
                        ?candidates,
                        chosen = %first.name,
                        "team query is ambiguous; using the first match"
                    );
                    Ok(Some(*first))
                }
            }
        }
    }
}
