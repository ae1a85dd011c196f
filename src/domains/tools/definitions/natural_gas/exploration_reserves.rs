//! Natural gas exploration and reserves tool.
//!
//! Resource discovery and stockpile levels.

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
pub struct ExplorationReservesParams {
    #[schemars(
        description = "Data route (e.g., 'wellend', 'drygase', 'crudeoilprov', 'welldrills'; default: wellend)"
    )]
    pub route: Option<String>,

    #[schemars(description = "Geographic area")]
    pub area: Option<String>,

    #[schemars(description = "Data frequency: monthly or annual")]
    pub frequency: Option<String>,

    #[schemars(description = "Start period")]
    pub start: Option<String>,

    #[schemars(description = "End period")]
    pub end: Option<String>,

    #[schemars(description = "Maximum number of records (default: 100)")]
    pub limit: Option<u64>,
}

pub struct ExplorationReservesTool;

impl ExplorationReservesTool {
    pub const NAME: &'static str = "eia_natural_gas_exploration_reserves";

    pub const DESCRIPTION: &'static str = "Get natural gas exploration and reserves data including resource discovery and stockpile levels.";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ExplorationReservesParams>(),
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
