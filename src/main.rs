//! Entry point: parse configuration, build the session and serve MCP over stdio.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use espn_ffl_mcp::{
    cli::Args,
    mcp::{run_server, EspnMcpServer},
    EspnClient, MatchPolicy, SessionStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    tracing::info!("ESPN Fantasy Football MCP server starting");

    let sessions = Arc::new(SessionStore::from_startup(
        &args.secrets,
        args.league_id,
        args.season,
    ));
    let client = EspnClient::with_base_url(args.base_url)?;
    let policy = if args.strict_team_match {
        MatchPolicy::Strict
    } else {
        MatchPolicy::FirstMatch
    };

    let server = EspnMcpServer::new(Arc::new(client), sessions, policy);
    run_server(server).await
}
