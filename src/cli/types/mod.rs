//! Type-safe wrappers and lookups for ESPN Fantasy Football data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::{pro_team_abbrev, LineupSlot, Position};
pub use time::{Season, Week};
