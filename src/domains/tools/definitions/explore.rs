//! Route exploration tool.
//!
//! The one metadata-only tool: it targets the bare endpoint (no `/data`
//! sibling) and returns the upstream catalog description for a path, or
//! the catalog root for an empty path. Useful for discovering available
//! series, facets, and parameters before issuing data queries.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::eia::EiaClient;
use crate::domains::tools::definitions::common::run_query;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExploreRoutesParams {
    /// The only required argument in the catalog; an empty string means
    /// the API root.
    #[schemars(
        description = "API path to explore (e.g., 'electricity', 'natural-gas', 'electricity/retail-sales', 'natural-gas/pri')"
    )]
    pub path: String,
}

pub struct ExploreRoutesTool;

impl ExploreRoutesTool {
    pub const NAME: &'static str = "eia_explore_routes";

    pub const DESCRIPTION: &'static str = "Explore available EIA API routes and their metadata. Use this to discover available data series, facets, and parameters for any endpoint.";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ExploreRoutesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<EiaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move { Ok(run_query(&client, Self::NAME, args).await) }.boxed()
        })
    }
}
