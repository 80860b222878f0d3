//! ID types for ESPN Fantasy Football.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN Fantasy Football League IDs.
///
/// Ensures league IDs are handled consistently throughout the application
/// and provides type safety to prevent mixing up league IDs with team or player IDs.
///
/// # Examples
///
/// ```rust
/// use espn_ffl_mcp::LeagueId;
///
/// let league_id = LeagueId::new(123456);
/// assert_eq!(league_id.as_u32(), 123456);
/// assert_eq!(league_id.to_string(), "123456");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new LeagueId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Team id within a league. ESPN numbers teams from 1 but ids are not
/// guaranteed to be contiguous once teams leave a league.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_from_str_trims_whitespace() {
        let league_id: LeagueId = " 98765 ".parse().unwrap();
        assert_eq!(league_id, LeagueId::new(98765));
    }

    #[test]
    fn test_league_id_from_str_rejects_garbage() {
        let result = "abc".parse::<LeagueId>();
        assert!(matches!(result, Err(EspnError::InvalidLeagueId(_))));
    }

    #[test]
    fn test_team_id_ordering_and_display() {
        let mut ids = vec![TeamId::new(7), TeamId::new(3)];
        ids.sort();
        assert_eq!(ids, vec![TeamId::new(3), TeamId::new(7)]);
        assert_eq!(TeamId::new(3).to_string(), "3");
    }

    #[test]
    fn test_player_id_allows_negative_defense_ids() {
        // Team defenses carry negative player ids in ESPN payloads
        let id: PlayerId = serde_json::from_str("-16002").unwrap();
        assert_eq!(id.as_i64(), -16002);
    }
}
