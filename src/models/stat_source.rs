//! Stat source for ESPN player stats
//!     - Actual (game results):    statSourceId = 0
//!     - Projected:                statSourceId = 1

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Actual,
    Projected,
}

impl StatSource {
    /// ESPN statSourceId corresponding to this source
    pub fn id(self) -> u8 {
        match self {
            StatSource::Actual => 0,
            StatSource::Projected => 1,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(StatSource::Actual),
            1 => Some(StatSource::Projected),
            _ => None,
        }
    }
}
