//! Electricity retail sales tool.
//!
//! Sales to ultimate customers by state and sector, with customer
//! counts and pricing. Upstream sources: Forms EIA-826, EIA-861,
//! EIA-861M.

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

/// Parameters for the retail sales tool. All optional; omitted filters
/// widen the query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RetailSalesParams {
    #[schemars(description = "State code (e.g., 'CA', 'TX', 'NY'). Leave empty for all states.")]
    pub state: Option<String>,

    #[schemars(
        description = "Sector ID: RES (residential), COM (commercial), IND (industrial), TRA (transportation), OTH (other), ALL (all sectors)"
    )]
    pub sector: Option<String>,

    #[schemars(description = "Data frequency: monthly, quarterly, or annual")]
    pub frequency: Option<String>,

    #[schemars(description = "Start date (YYYY-MM for monthly, YYYY for annual)")]
    pub start: Option<String>,

    #[schemars(description = "End date (YYYY-MM for monthly, YYYY for annual)")]
    pub end: Option<String>,

    #[schemars(
        description = "Data columns to retrieve (e.g., 'revenue', 'sales', 'price', 'customers')"
    )]
    pub data_columns: Option<Vec<String>>,

    #[schemars(description = "Maximum number of records to return (default: 100, max: 5000)")]
    pub limit: Option<u64>,
}

pub struct RetailSalesTool;

impl RetailSalesTool {
    pub const NAME: &'static str = "eia_electricity_retail_sales";

    pub const DESCRIPTION: &'static str = "Get electricity retail sales data including sales to customers by state and sector, customer counts, and pricing. Sources: Forms EIA-826, EIA-861, EIA-861M";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RetailSalesParams>(),
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
