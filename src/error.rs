//! Error types for the ESPN Fantasy Football MCP server

use std::path::PathBuf;

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided, not stored in the session and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("{}", not_authenticated_message(*league_id, *credentials_sent))]
    NotAuthenticated {
        league_id: u32,
        credentials_sent: bool,
    },

    #[error("ESPN API returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Unexpected ESPN response: {message}")]
    MalformedResponse { message: String },

    #[error("Secrets file {} could not be used: {message}", path.display())]
    MalformedSecrets { path: PathBuf, message: String },

    #[error("No team matches '{query}' by id, name or owner")]
    TeamNotFound { query: String },

    #[error("'{query}' matches {} teams: {}", candidates.len(), candidates.join(", "))]
    AmbiguousMatch {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Invalid week {week}. Must be between 1 and {max}")]
    InvalidWeek { week: i64, max: u16 },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

fn not_authenticated_message(league_id: u32, credentials_sent: bool) -> String {
    if credentials_sent {
        format!(
            "ESPN rejected the stored credentials for league {}. Use the authenticate tool with fresh ESPN_S2 and SWID cookies",
            league_id
        )
    } else {
        format!(
            "League {} appears to be private. Use the authenticate tool first with your ESPN_S2 and SWID cookies",
            league_id
        )
    }
}

impl EspnError {
    /// Stable identifier used in structured tool failures.
    pub fn kind(&self) -> &'static str {
        match self {
            EspnError::Http(_) => "UpstreamError",
            EspnError::Upstream { .. } => "UpstreamError",
            EspnError::Json(_) | EspnError::MalformedResponse { .. } => "MalformedResponse",
            EspnError::Io(_) => "IoError",
            EspnError::InvalidHeader(_) => "InvalidHeader",
            EspnError::MissingLeagueId { .. } => "MissingLeagueId",
            EspnError::InvalidLeagueId(_) => "InvalidLeagueId",
            EspnError::NotAuthenticated { .. } => "NotAuthenticated",
            EspnError::MalformedSecrets { .. } => "MalformedSecrets",
            EspnError::TeamNotFound { .. } => "TeamNotFound",
            EspnError::AmbiguousMatch { .. } => "AmbiguousMatch",
            EspnError::InvalidWeek { .. } => "InvalidWeek",
            EspnError::PlayerNotFound { .. } => "PlayerNotFound",
            EspnError::InvalidInput { .. } => "InvalidInput",
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        EspnError::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        EspnError::MalformedResponse {
            message: message.into(),
        }
    }
}
