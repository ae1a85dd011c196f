//! Regional transmission operator (RTO) tool.
//!
//! Hourly and daily electric power operations by balancing authority:
//! demand, generation, and interchange. Upstream source: Form EIA-930.

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
pub struct RtoParams {
    #[schemars(
        description = "RTO data route: region-data, region-sub-ba-data, fuel-type-data, interchange-data, daily-region-data, daily-region-sub-ba-data, daily-fuel-type-data, or daily-interchange-data (default: region-data)"
    )]
    pub route: Option<String>,

    #[schemars(
        description = "Balancing authority code (e.g., 'CISO' for California ISO, 'PJM', 'MISO', 'ERCOT')"
    )]
    pub respondent: Option<String>,

    #[schemars(description = "Fuel type for generation data")]
    pub fuel_type: Option<String>,

    #[schemars(description = "Start datetime (YYYY-MM-DDTHH)")]
    pub start: Option<String>,

    #[schemars(description = "End datetime (YYYY-MM-DDTHH)")]
    pub end: Option<String>,

    #[schemars(description = "Data columns (e.g., 'value' for demand/generation values)")]
    pub data_columns: Option<Vec<String>>,

    #[schemars(description = "Maximum number of records (default: 100)")]
    pub limit: Option<u64>,
}

pub struct RtoTool;

impl RtoTool {
    pub const NAME: &'static str = "eia_electricity_rto";

    pub const DESCRIPTION: &'static str = "Get hourly and daily electric power operations by balancing authority (Regional Transmission Operator). Includes demand, generation, and interchange data. Source: Form EIA-930";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RtoParams>(),
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
