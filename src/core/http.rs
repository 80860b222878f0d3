//! HTTP utilities for ESPN API communication

use crate::{session::Credentials, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Build the headers for an ESPN read, adding session cookies when present.
///
/// Public leagues need no cookies; private leagues need both `SWID` and `espn_s2`.
pub fn espn_header_map(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        let cookie = format!("SWID={}; espn_s2={}", creds.swid, creds.espn_s2);
        let mut value = HeaderValue::from_str(&cookie)?;
        value.set_sensitive(true);
        h.insert(COOKIE, value);
    }
    Ok(h)
}
