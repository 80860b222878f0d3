use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, StatusCode,
};
use serde_json::json;
use tracing::debug;

use crate::{
    core::http::espn_header_map,
    espn::{
        ingest::{box_scores_from_raw, league_from_raw},
        types::RawLeague,
        FantasyDataSource,
    },
    models::{BoxScore, League},
    session::Session,
    EspnError, Result, Week,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Header ESPN reads server-side filters from.
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

const LEAGUE_VIEWS: [&str; 6] = [
    "mTeam",
    "mRoster",
    "mMatchup",
    "mSettings",
    "mStandings",
    "mStatus",
];
const BOX_SCORE_VIEWS: [&str; 2] = ["mMatchupScore", "mScoreboard"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest slice of an error body carried into [`EspnError::Upstream`].
const MAX_ERROR_BODY: usize = 200;

/// HTTP client for the ESPN league endpoints.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
}

impl EspnClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FFL_BASE_URL)
    }

    /// Point the client at another host; tests use this with a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("espn-ffl-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// League URL and the query parameters that select the season.
    ///
    /// Seasons before 2018 only exist under `leagueHistory`.
    fn league_endpoint(&self, session: &Session) -> (String, Vec<(&'static str, String)>) {
        if session.season.is_historical() {
            (
                format!("{}/leagueHistory/{}", self.base_url, session.league_id),
                vec![("seasonId", session.season.to_string())],
            )
        } else {
            (
                format!(
                    "{}/seasons/{}/segments/0/leagues/{}",
                    self.base_url, session.season, session.league_id
                ),
                Vec::new(),
            )
        }
    }

    async fn get_league_json(
        &self,
        session: &Session,
        mut query: Vec<(&'static str, String)>,
        extra_headers: HeaderMap,
    ) -> Result<RawLeague> {
        let (url, season_query) = self.league_endpoint(session);
        query.extend(season_query);

        let mut headers = espn_header_map(session.credentials.as_ref())?;
        headers.extend(extra_headers);

        debug!(
            %url,
            league_id = %session.league_id,
            season = %session.season,
            authenticated = session.is_authenticated(),
            "requesting ESPN league data"
        );

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "ESPN responded");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(EspnError::NotAuthenticated {
                league_id: session.league_id.as_u32(),
                credentials_sent: session.is_authenticated(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EspnError::Upstream {
                status: status.as_u16(),
                message: upstream_message(status, &body),
            });
        }

        let body = response.text().await?;
        parse_league_body(&body, session.season.is_historical())
    }
}

#[async_trait]
impl FantasyDataSource for EspnClient {
    async fn fetch_league(
        &self,
        session: &Session,
        scoring_period: Option<Week>,
    ) -> Result<League> {
        let mut query: Vec<(&'static str, String)> = LEAGUE_VIEWS
            .iter()
            .map(|view| ("view", view.to_string()))
            .collect();
        if let Some(week) = scoring_period {
            query.push(("scoringPeriodId", week.to_string()));
        }

        let raw = self.get_league_json(session, query, HeaderMap::new()).await?;
        league_from_raw(raw, session.league_id, session.season)
    }

    async fn fetch_box_scores(
        &self,
        session: &Session,
        matchup_period: u16,
        week: Week,
    ) -> Result<Vec<BoxScore>> {
        let mut query: Vec<(&'static str, String)> = BOX_SCORE_VIEWS
            .iter()
            .map(|view| ("view", view.to_string()))
            .collect();
        query.push(("scoringPeriodId", week.to_string()));

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(FANTASY_FILTER_HEADER),
            HeaderValue::from_str(&matchup_filter(matchup_period))?,
        );

        let raw = self.get_league_json(session, query, headers).await?;
        box_scores_from_raw(raw, session.season, matchup_period, week)
    }
}

/// Server-side filter limiting the schedule to one matchup period.
pub fn matchup_filter(matchup_period: u16) -> String {
    json!({
        "schedule": {
            "filterMatchupPeriodIds": { "value": [matchup_period] }
        }
    })
    .to_string()
}

fn parse_league_body(body: &str, historical: bool) -> Result<RawLeague> {
    if !historical {
        return Ok(serde_json::from_str(body)?);
    }
    let mut seasons: Vec<RawLeague> = serde_json::from_str(body)?;
    if seasons.is_empty() {
        return Err(EspnError::malformed("league history has no entry for that season"));
    }
    Ok(seasons.swap_remove(0))
}

fn upstream_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status.canonical_reason().unwrap_or("no response body").to_string();
    }
    body.chars().take(MAX_ERROR_BODY).collect()
}
