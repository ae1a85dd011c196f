//! Electric power operational data tool.
//!
//! Monthly and annual generation, fuel consumption, and emissions by
//! state, sector, and energy source. Upstream source: Form EIA-923.

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
pub struct OperationalDataParams {
    #[schemars(description = "State code (e.g., 'CA', 'TX')")]
    pub state: Option<String>,

    #[schemars(
        description = "Fuel type code (e.g., 'NG' for natural gas, 'COL' for coal, 'NUC' for nuclear, 'SUN' for solar, 'WND' for wind)"
    )]
    pub fuel_type: Option<String>,

    #[schemars(description = "Data frequency: monthly or annual")]
    pub frequency: Option<String>,

    #[schemars(description = "Start date")]
    pub start: Option<String>,

    #[schemars(description = "End date")]
    pub end: Option<String>,

    #[schemars(description = "Data columns to retrieve (e.g., 'generation', 'total-consumption')")]
    pub data_columns: Option<Vec<String>>,

    #[schemars(description = "Maximum number of records (default: 100)")]
    pub limit: Option<u64>,
}

pub struct OperationalDataTool;

impl OperationalDataTool {
    pub const NAME: &'static str = "eia_electricity_operational_data";

    pub const DESCRIPTION: &'static str = "Get monthly and annual electric power operational data including generation, fuel consumption, and emissions by state, sector, and energy source. Source: Form EIA-923";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<OperationalDataParams>(),
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
