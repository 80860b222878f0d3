use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use tracing::info;

use crate::{
    commands::{league_data, matchups, player_data, roster, team_lookup::MatchPolicy},
    espn::FantasyDataSource,
    models::output::SessionStatus,
    session::{Credentials, Session, SessionStore},
    EspnError,
};

use super::helpers::respond;
use super::types::{
    AuthenticateParams, FindTeamParams, LeagueParams, LeagueScope, MatchupDetailParams,
    PlayerStatsParams, TeamParams, WeeklyMatchupsParams,
};

#[derive(Clone)]
pub struct EspnMcpServer {
    tool_router: ToolRouter<Self>,
    source: Arc<dyn FantasyDataSource>,
    sessions: Arc<SessionStore>,
    policy: MatchPolicy,
}

#[tool_router]
impl EspnMcpServer {
    pub fn new(
        source: Arc<dyn FantasyDataSource>,
        sessions: Arc<SessionStore>,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            source,
            sessions,
            policy,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn session(&self, scope: &LeagueScope) -> crate::Result<Session> {
        self.sessions.get_session(scope.league_id(), scope.season())
    }

    fn status(&self, message: impl Into<String>) -> SessionStatus {
        let defaults = self.sessions.get_session(None, None).ok();
        SessionStatus {
            authenticated: self.sessions.is_authenticated(),
            league_id: defaults.as_ref().map(|s| s.league_id),
            season: defaults.map(|s| s.season),
            message: message.into(),
        }
    }

    /// Store ESPN session cookies for private leagues
    #[tool(
        description = "Store ESPN authentication cookies (espn_s2 and SWID) for this session. Needed for private leagues. Optionally sets the default league_id and year."
    )]
    pub async fn authenticate(
        &self,
        Parameters(params): Parameters<AuthenticateParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(credentials) = Credentials::new(params.espn_s2, params.swid) else {
            return respond::<SessionStatus>(Err(EspnError::invalid_input(
                "espn_s2 and swid must both be non-empty",
            )));
        };

        self.sessions.set_credentials(
            params.league_id.map(crate::LeagueId::new),
            params.year.map(crate::Season::new),
            Some(credentials),
        );
        info!("stored ESPN credentials for this session");

        respond(Ok(self.status(
            "Authentication stored. Credentials are kept in memory for this session only.",
        )))
    }

    /// Drop stored credentials
    #[tool(description = "Forget the ESPN cookies stored for this session.")]
    pub async fn logout(&self) -> Result<CallToolResult, McpError> {
        let message = if self.sessions.clear_credentials() {
            info!("cleared ESPN credentials");
            "Credentials cleared. Only public leagues are reachable until you authenticate again."
        } else {
            "No credentials were stored."
        };
        respond(Ok(self.status(message)))
    }

    #[tool(
        description = "Get basic information about a fantasy football league: name, season, current week, NFL week, final week, teams and scoring type."
    )]
    pub async fn get_league_info(
        &self,
        Parameters(params): Parameters<LeagueParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            league_data::get_league_info(self.source.as_ref(), &session).await
        }
        .await;
        respond(result)
    }

    #[tool(
        description = "Get a team's roster with positions, injury status, lineup slots and season and current-week stats. team_query may be a team id, team name or owner name."
    )]
    pub async fn get_team_roster(
        &self,
        Parameters(params): Parameters<TeamParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            roster::get_team_roster(self.source.as_ref(), &session, &params.team_query, self.policy)
                .await
        }
        .await;
        respond(result)
    }

    #[tool(
        description = "Get a team's profile: owners, record, points for and against, transactions, playoff seed, final standing and playoff odds."
    )]
    pub async fn get_team_info(
        &self,
        Parameters(params): Parameters<TeamParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            roster::get_team_info(self.source.as_ref(), &session, &params.team_query, self.policy)
                .await
        }
        .await;
        respond(result)
    }

    #[tool(
        description = "Resolve a team by id, exact name, owner name or partial name, and report which rule matched."
    )]
    pub async fn find_team(
        &self,
        Parameters(params): Parameters<FindTeamParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            roster::lookup_team(self.source.as_ref(), &session, &params.query, self.policy).await
        }
        .await;
        respond(result)
    }

    #[tool(
        description = "Find a rostered player by (partial) name and get their fantasy stats. With week, only that week's stats are returned."
    )]
    pub async fn get_player_stats(
        &self,
        Parameters(params): Parameters<PlayerStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            player_data::get_player_stats(
                self.source.as_ref(),
                &session,
                &params.player_name,
                params.week,
            )
            .await
        }
        .await;
        respond(result)
    }

    #[tool(
        description = "Get league standings ordered by wins, then points for."
    )]
    pub async fn get_standings(
        &self,
        Parameters(params): Parameters<LeagueParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            league_data::get_standings(self.source.as_ref(), &session).await
        }
        .await;
        respond(result)
    }

    #[tool(
        description = "List every matchup of a week with team names, owners, scores and winner. Defaults to the last completed week."
    )]
    pub async fn get_weekly_matchups(
        &self,
        Parameters(params): Parameters<WeeklyMatchupsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            matchups::get_weekly_matchups(self.source.as_ref(), &session, params.week).await
        }
        .await;
        respond(result)
    }

    #[tool(
        description = "Compare two teams for one week: each team's lineup with slots, points, projections and stat breakdowns, their scores, and the winner if they played each other."
    )]
    pub async fn get_detailed_matchup_info(
        &self,
        Parameters(params): Parameters<MatchupDetailParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = async {
            let session = self.session(&params.scope)?;
            matchups::get_detailed_matchup_info(
                self.source.as_ref(),
                &session,
                params.week,
                &params.team_a_query,
                &params.team_b_query,
                self.policy,
            )
            .await
        }
        .await;
        respond(result)
    }
}

#[tool_handler]
impl ServerHandler for EspnMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "ESPN Fantasy Football league data for AI agents.\n\n\
                 Available tools:\n\
                 1. authenticate / logout - Store or forget ESPN cookies for private leagues\n\
                 2. get_league_info - League overview\n\
                 3. get_standings - Standings by wins and points for\n\
                 4. find_team - Resolve a team by id, name or owner\n\
                 5. get_team_roster / get_team_info - Roster and profile of one team\n\
                 6. get_player_stats - Stats of a rostered player\n\
                 7. get_weekly_matchups - All pairings of a week\n\
                 8. get_detailed_matchup_info - Lineups of two teams for a week\n\n\
                 Every query tool accepts optional league_id and year that override the session defaults.\n\
                 Failures come back as {\"error\": <kind>, \"message\": <text>}. A NotAuthenticated error\n\
                 means the league is private: call authenticate first."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Serve the tools over stdio until the client disconnects.
pub async fn run_server(server: EspnMcpServer) -> Result<()> {
    let service = server.serve(rmcp::transport::stdio()).await?;
    info!("MCP server running on stdio");
    service.waiting().await?;
    Ok(())
}
