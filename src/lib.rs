//! EIA MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing the U.S. Energy
//! Information Administration open data API as a fixed catalog of
//! structured tools. Each tool call is translated into a single
//! parameterized GET against the EIA v2 API and the raw JSON response
//! (or a normalized error) is returned inline to the caller.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and
//!   the stdio transport
//! - **domains::eia**: the query builder (tool name + argument bag →
//!   request descriptor) and the request executor
//! - **domains::tools**: the declarative tool catalog and router
//!
//! # Example
//!
//! ```rust,no_run
//! use eia_mcp_server::{Config, EiaServer};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let server = EiaServer::new(config)?;
//! // Serve it over stdio...
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, EiaServer, Error, Result};
