//! Fantasy football position, lineup slot and pro team lookups.

use serde::{Serialize, Serializer};
use std::fmt;

/// A player's natural position, decoded from ESPN's `defaultPositionId`.
///
/// # Examples
///
/// ```rust
/// use espn_ffl_mcp::Position;
///
/// assert_eq!(Position::from_default_position_id(1), Position::QB);
/// assert_eq!(Position::from_default_position_id(16).to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    /// IDP and punter positions the league may roster
    Other(i32),
}

impl Position {
    pub fn from_default_position_id(id: i32) -> Self {
        match id {
            1 => Position::QB,
            2 => Position::RB,
            3 => Position::WR,
            4 => Position::TE,
            5 => Position::K,
            16 => Position::DEF,
            other => Position::Other(other),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::QB => write!(f, "QB"),
            Position::RB => write!(f, "RB"),
            Position::WR => write!(f, "WR"),
            Position::TE => write!(f, "TE"),
            Position::K => write!(f, "K"),
            Position::DEF => write!(f, "D/ST"),
            Position::Other(7) => write!(f, "P"),
            Position::Other(9) => write!(f, "DT"),
            Position::Other(10) => write!(f, "DE"),
            Position::Other(11) => write!(f, "LB"),
            Position::Other(12) => write!(f, "CB"),
            Position::Other(13) => write!(f, "S"),
            Position::Other(14) => write!(f, "HC"),
            Position::Other(id) => write!(f, "POS_{}", id),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Where a player sits in a fantasy lineup, decoded from `lineupSlotId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineupSlot(pub i32);

impl LineupSlot {
    pub const BENCH: LineupSlot = LineupSlot(20);
    pub const IR: LineupSlot = LineupSlot(21);

    /// Bench and IR slots do not score.
    pub fn is_starter(&self) -> bool {
        *self != Self::BENCH && *self != Self::IR
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "QB",
            1 => "TQB",
            2 => "RB",
            3 => "RB/WR",
            4 => "WR",
            5 => "WR/TE",
            6 => "TE",
            7 => "OP",
            8 => "DT",
            9 => "DE",
            10 => "LB",
            11 => "DL",
            12 => "CB",
            13 => "S",
            14 => "DB",
            15 => "DP",
            16 => "D/ST",
            17 => "K",
            18 => "P",
            19 => "HC",
            20 => "BE",
            21 => "IR",
            23 => "RB/WR/TE",
            24 => "ER",
            _ => "UNKNOWN",
        }
    }
}

impl fmt::Display for LineupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for LineupSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// NFL team abbreviation for ESPN's `proTeamId`. Free agents use 0.
pub fn pro_team_abbrev(pro_team_id: i32) -> &'static str {
    match pro_team_id {
        1 => "ATL",
        2 => "BUF",
        3 => "CHI",
        4 => "CIN",
        5 => "CLE",
        6 => "DAL",
        7 => "DEN",
        8 => "DET",
        9 => "GB",
        10 => "TEN",
        11 => "IND",
        12 => "KC",
        13 => "LV",
        14 => "LAR",
        15 => "MIA",
        16 => "MIN",
        17 => "NE",
        18 => "NO",
        19 => "NYG",
        20 => "NYJ",
        21 => "PHI",
        22 => "ARI",
        23 => "PIT",
        24 => "LAC",
        25 => "SF",
        26 => "SEA",
        27 => "TB",
        28 => "WSH",
        29 => "CAR",
        30 => "JAX",
        33 => "BAL",
        34 => "HOU",
        _ => "FA",
    }
}
