//! Natural gas imports, exports, and pipeline movement tool.
//!
//! Cross-border flows and distribution infrastructure.

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
pub struct ImportsExportsParams {
    #[schemars(
        description = "Movement data route (e.g., 'impc', 'expc', 'poe1', 'state', 'ist'; default: state)"
    )]
    pub route: Option<String>,

    #[schemars(description = "Geographic area")]
    pub area: Option<String>,

    #[schemars(description = "Country for import/export data")]
    pub country: Option<String>,

    #[schemars(description = "Data frequency: monthly or annual")]
    pub frequency: Option<String>,

    #[schemars(description = "Start period")]
    pub start: Option<String>,

    #[schemars(description = "End period")]
    pub end: Option<String>,

    #[schemars(description = "Data columns to retrieve")]
    pub data_columns: Option<Vec<String>>,

    #[schemars(description = "Maximum number of records (default: 100)")]
    pub limit: Option<u64>,
}

pub struct ImportsExportsTool;

impl ImportsExportsTool {
    pub const NAME: &'static str = "eia_natural_gas_imports_exports";

    pub const DESCRIPTION: &'static str = "Get natural gas imports, exports, and pipeline movement data including cross-border flows and distribution infrastructure.";

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ImportsExportsParams>(),
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
