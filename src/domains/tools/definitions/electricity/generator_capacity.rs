//! Operating generator capacity tool.
//!
//! Inventory of operable U.S. generators: capacity, technology type,
//! and status. Upstream sources: Forms EIA-860, EIA-860M.

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
pub struct GeneratorCapacityParams {
    #[schemars(description = "State code")]
    pub state: Option<String>,

    #[schemars(description = "Generator status code")]
    pub status: Option<String>,

    #[schemars(description = "Technology type")]
    pub technology: Option<String>,

    #[schemars(description = "Primary energy source code")]
    pub energy_source: Option<String>,

    #[schemars(description = "Start period")]
    pub start: Option<String>,

    #[schemars(description = "End period")]
    pub end: Option<String>,

    #[schemars(
        description = "Data columns (e.g., 'nameplate-capacity-mw', 'net-summer-capacity-mw')"
    )]
    pub data_columns: Option<Vec<String>>,

    #[schemars(description = "Maximum number of records (default: 100)")]
    pub limit: Option<u64>,
}

pub struct GeneratorCapacityTool;

impl GeneratorCapacityTool {
    pub const NAME: &'static str = "eia_electricity_generator_capacity";

    pub const DESCRIPTION: &'static str = "Get inventory of operable generators in the U.S. including capacity, technology type, and status. Sources: Forms EIA-860, EIA-860M";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeneratorCapacityParams>(),
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
