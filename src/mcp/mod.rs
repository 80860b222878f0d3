//! Model Context Protocol (MCP) server.
//!
//! Exposes the league queries as MCP tools over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: turning command results into tool results
//! - `server`: the tool router and server handler
//! - `types`: tool parameter definitions

mod helpers;
mod server;
pub mod types;

pub use server::{run_server, EspnMcpServer};
