//! Tool router: builds the rmcp ToolRouter over the whole catalog.
//!
//! Each tool definition creates its own route against a shared EIA
//! client; this module just enumerates them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::eia::EiaClient;

use super::definitions::{
    ConsumptionTool, ExplorationReservesTool, ExploreRoutesTool, FacilityFuelTool,
    GeneratorCapacityTool, ImportsExportsTool, OperationalDataTool, PricesTool, ProductionTool,
    RetailSalesTool, RtoTool, StateProfilesTool, StorageTool, SummaryTool,
};

/// Build the tool router with every tool in the catalog.
pub fn build_tool_router<S>(client: Arc<EiaClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(RetailSalesTool::create_route(client.clone()))
        .with_route(OperationalDataTool::create_route(client.clone()))
        .with_route(RtoTool::create_route(client.clone()))
        .with_route(StateProfilesTool::create_route(client.clone()))
        .with_route(GeneratorCapacityTool::create_route(client.clone()))
        .with_route(FacilityFuelTool::create_route(client.clone()))
        .with_route(SummaryTool::create_route(client.clone()))
        .with_route(PricesTool::create_route(client.clone()))
        .with_route(ExplorationReservesTool::create_route(client.clone()))
        .with_route(ProductionTool::create_route(client.clone()))
        .with_route(ImportsExportsTool::create_route(client.clone()))
        .with_route(StorageTool::create_route(client.clone()))
        .with_route(ConsumptionTool::create_route(client.clone()))
        .with_route(ExploreRoutesTool::create_route(client))
}
