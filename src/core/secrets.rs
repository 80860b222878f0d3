//! Local secrets file: `{"espn_s2", "swid", "league_id"?, "year"?}`.
//!
//! The file is only ever read. `league_id` may be written as a number or a
//! string since that is how it shows up in ESPN league URLs.

use std::{fs, io, path::Path};

use serde::{Deserialize, Deserializer};

use crate::{session::Credentials, EspnError, LeagueId, Result, Season};

#[derive(Debug, Deserialize)]
pub struct SecretsFile {
    #[serde(default)]
    pub espn_s2: Option<String>,
    #[serde(default)]
    pub swid: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_league_id")]
    pub league_id: Option<LeagueId>,
    #[serde(default)]
    pub year: Option<Season>,
}

impl SecretsFile {
    /// Cookies, when both are present and non-blank.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.espn_s2, &self.swid) {
            (Some(s2), Some(swid)) => Credentials::new(s2.as_str(), swid.as_str()),
            _ => None,
        }
    }
}

fn de_lenient_league_id<'de, D>(deserializer: D) -> std::result::Result<Option<LeagueId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(u32),
        Str(String),
    }

    match Option::<NumOrStr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumOrStr::Num(n)) => Ok(Some(LeagueId::new(n))),
        Some(NumOrStr::Str(s)) => s
            .parse::<LeagueId>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Read the secrets file. `Ok(None)` means the file does not exist.
pub fn read_secrets(path: &Path) -> Result<Option<SecretsFile>> {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(EspnError::MalformedSecrets {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| EspnError::MalformedSecrets {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
