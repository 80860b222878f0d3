//! Core utilities shared by the ESPN client and the session layer
//!
//! - `http`: request headers, including the ESPN session cookies
//! - `secrets`: the git-ignored secrets file read at startup

pub mod http;
pub mod secrets;

pub use http::espn_header_map;
pub use secrets::{read_secrets, SecretsFile};
