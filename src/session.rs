//! Session and credential holder.
//!
//! The server owns one [`SessionStore`] and hands a [`Session`] snapshot to
//! every query. Nothing here is global, so two stores can serve two leagues
//! side by side without sharing credentials.

use std::fmt;
use std::path::Path;
use std::sync::RwLock;

use tracing::{info, warn};

use crate::{
    commands::resolve_league_id, core::secrets::read_secrets, LeagueId, Result, Season,
};

/// ESPN session cookies needed for private leagues.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub espn_s2: String,
    pub swid: String,
}

impl Credentials {
    /// Build credentials, rejecting blank cookie values.
    pub fn new(espn_s2: impl Into<String>, swid: impl Into<String>) -> Option<Self> {
        let espn_s2 = espn_s2.into().trim().to_string();
        let swid = swid.into().trim().to_string();
        if espn_s2.is_empty() || swid.is_empty() {
            return None;
        }
        Some(Self { espn_s2, swid })
    }

    /// Read `ESPN_S2` and `ESPN_SWID`; both must be set.
    pub fn from_env() -> Option<Self> {
        let s2 = std::env::var("ESPN_S2").ok()?;
        let swid = std::env::var("ESPN_SWID").ok()?;
        Self::new(s2, swid)
    }
}

// Cookie values must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("espn_s2", &"<redacted>")
            .field("swid", &"<redacted>")
            .finish()
    }
}

/// The context a single tool call runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub league_id: LeagueId,
    pub season: Season,
    pub credentials: Option<Credentials>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

#[derive(Debug, Clone, Default)]
struct SessionDefaults {
    league_id: Option<LeagueId>,
    season: Option<Season>,
    credentials: Option<Credentials>,
}

/// Mutable holder for the defaults every tool call falls back to.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<SessionDefaults>,
}

impl SessionStore {
    pub fn new(
        league_id: Option<LeagueId>,
        season: Option<Season>,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            inner: RwLock::new(SessionDefaults {
                league_id,
                season,
                credentials,
            }),
        }
    }

    /// Populate the store at process start.
    ///
    /// Explicit `league_id`/`season` (from flags or env) win over the secrets
    /// file. A missing or malformed secrets file is logged and leaves the
    /// session unauthenticated; it never aborts startup.
    pub fn from_startup(
        secrets_path: &Path,
        league_id: Option<LeagueId>,
        season: Option<Season>,
    ) -> Self {
        let secrets = match read_secrets(secrets_path) {
            Ok(Some(secrets)) => {
                info!(path = %secrets_path.display(), "loaded secrets file");
                Some(secrets)
            }
            Ok(None) => {
                info!(
                    path = %secrets_path.display(),
                    "no secrets file found; private leagues need the authenticate tool"
                );
                None
            }
            Err(e) => {
                warn!(error = %e, "ignoring secrets file");
                None
            }
        };

        let (file_credentials, file_league, file_season) = match secrets {
            Some(s) => (s.credentials(), s.league_id, s.year),
            None => (None, None, None),
        };

        let credentials = file_credentials.or_else(|| {
            let from_env = Credentials::from_env();
            if from_env.is_some() {
                info!("using ESPN_S2/ESPN_SWID from the environment");
            }
            from_env
        });

        Self::new(league_id.or(file_league), season.or(file_season), credentials)
    }

    /// Overwrite the stored defaults.
    ///
    /// `league_id` and `season` only replace the stored value when given;
    /// `credentials` always replaces it.
    pub fn set_credentials(
        &self,
        league_id: Option<LeagueId>,
        season: Option<Season>,
        credentials: Option<Credentials>,
    ) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if league_id.is_some() {
            inner.league_id = league_id;
        }
        if season.is_some() {
            inner.season = season;
        }
        inner.credentials = credentials;
    }

    /// Drop stored credentials. Returns whether any were stored.
    pub fn clear_credentials(&self) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.credentials.take().is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.credentials.is_some()
    }

    /// Snapshot the effective session for one call.
    ///
    /// Explicit arguments win over stored defaults; the league falls back to
    /// the `ESPN_FFL_LEAGUE_ID` env var and the season to the current one.
    pub fn get_session(
        &self,
        league_id: Option<LeagueId>,
        season: Option<Season>,
    ) -> Result<Session> {
        let inner = self
            .inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        Ok(Session {
            league_id: resolve_league_id(league_id.or(inner.league_id))?,
            season: season.or(inner.season).unwrap_or_default(),
            credentials: inner.credentials,
        })
    }
}
