//! MCP server implementation.
//!
//! The server handler is thin: tool routing is generated by the
//! `#[tool_handler]` macro from the router built in
//! `domains/tools/router.rs`, and each tool route owns its own logic.
//! The only state is the configuration and the shared EIA client baked
//! into the routes.

use std::sync::Arc;

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};

use super::config::Config;
use super::error::Error;
use crate::domains::eia::{EiaClient, validate_rules};
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
#[derive(Clone)]
pub struct EiaServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl EiaServer {
    /// Create a new server with the given configuration.
    ///
    /// Fails if the static tool rule table does not pass its startup
    /// validation.
    pub fn new(config: Config) -> super::error::Result<Self> {
        validate_rules().map_err(Error::config)?;

        let config = Arc::new(config);
        let client = Arc::new(EiaClient::new(config.credentials.eia_api_key.clone()));

        Ok(Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

#[tool_handler]
impl ServerHandler for EiaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "EIA open data tools: electricity and natural gas statistics from the \
                 U.S. Energy Information Administration. Use eia_explore_routes to \
                 discover available series and facets for any endpoint."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction_passes_rule_validation() {
        let server = EiaServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "eia-mcp");
        assert!(!server.version().is_empty());
    }
}
