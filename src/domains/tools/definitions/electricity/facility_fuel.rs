//! Facility fuel tool.
//!
//! Annual and monthly operational data for individual power plants by
//! energy source and equipment type. Upstream source: Form EIA-923.

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
pub struct FacilityFuelParams {
    #[schemars(description = "State code")]
    pub state: Option<String>,

    #[schemars(description = "Specific plant ID")]
    pub plant_id: Option<String>,

    #[schemars(description = "Fuel type code")]
    pub fuel_type: Option<String>,

    #[schemars(description = "Data frequency: monthly, quarterly, or annual")]
    pub frequency: Option<String>,

    #[schemars(description = "Start period")]
    pub start: Option<String>,

    #[schemars(description = "End period")]
    pub end: Option<String>,

    #[schemars(
        description = "Data columns (e.g., 'generation', 'gross-generation', 'consumption-for-eg', 'total-consumption')"
    )]
    pub data_columns: Option<Vec<String>>,

    #[schemars(description = "Maximum number of records (default: 100)")]
    pub limit: Option<u64>,
}

pub struct FacilityFuelTool;

impl FacilityFuelTool {
    pub const NAME: &'static str = "eia_electricity_facility_fuel";

    pub const DESCRIPTION: &'static str = "Get annual and monthly operational data for individual power plants by energy source and equipment type. Source: Form EIA-923";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FacilityFuelParams>(),
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
