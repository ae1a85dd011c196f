//! State electricity profiles tool.
//!
//! State-level generation mix, consumption patterns, and infrastructure
//! data. Note the upstream quirk handled by the query builder: the
//! emissions route filters on `stateid` while every other route filters
//! on `state`.

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
pub struct StateProfilesParams {
    #[schemars(
        description = "Profile data route: emissions-by-state-by-fuel, source-disposition, capability, net-metering, or meters (default: source-disposition)"
    )]
    pub route: Option<String>,

    #[schemars(description = "State code (e.g., 'CA', 'TX')")]
    pub state: Option<String>,

    #[schemars(description = "Start year")]
    pub start: Option<String>,

    #[schemars(description = "End year")]
    pub end: Option<String>,

    #[schemars(description = "Maximum number of records (default: 100)")]
    pub limit: Option<u64>,
}

pub struct StateProfilesTool;

impl StateProfilesTool {
    pub const NAME: &'static str = "eia_electricity_state_profiles";

    pub const DESCRIPTION: &'static str = "Get state-level electricity profiles including generation mix, consumption patterns, and infrastructure data.";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<StateProfilesParams>(),
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
