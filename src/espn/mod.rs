//! ESPN Fantasy Football v3 data access.
//!
//! [`http::EspnClient`] talks to ESPN; [`ingest`] turns what it returns into
//! [`crate::models`] records. The query layer only ever sees the
//! [`FantasyDataSource`] trait, so tests can swap the network out.

pub mod http;
pub mod ingest;
pub mod stat_names;
pub mod types;

use async_trait::async_trait;

use crate::{
    models::{BoxScore, League},
    session::Session,
    Result, Week,
};

/// Where league snapshots and box scores come from.
#[async_trait]
pub trait FantasyDataSource: Send + Sync {
    /// Load the league with teams, rosters, settings and standings.
    ///
    /// `scoring_period` asks ESPN for roster stats as of that week; `None`
    /// returns the current rosters.
    async fn fetch_league(&self, session: &Session, scoring_period: Option<Week>)
        -> Result<League>;

    /// Load the box scores of one matchup period, with lineups scored for `week`.
    async fn fetch_box_scores(
        &self,
        session: &Session,
        matchup_period: u16,
        week: Week,
    ) -> Result<Vec<BoxScore>>;
}
