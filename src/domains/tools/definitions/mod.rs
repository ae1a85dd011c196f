//! Tool definitions.
//!
//! One file per tool. Each file declares the tool's parameter schema,
//! name, and description, and wires a route that hands the raw argument
//! bag to the query builder. The schemas are declarative surface; all
//! argument interpretation lives in `domains::eia::query`.

pub mod common;
pub mod electricity;
pub mod explore;
pub mod natural_gas;

pub use electricity::{
    FacilityFuelTool, GeneratorCapacityTool, OperationalDataTool, RetailSalesTool, RtoTool,
    StateProfilesTool,
};
pub use explore::ExploreRoutesTool;
pub use natural_gas::{
    ConsumptionTool, ExplorationReservesTool, ImportsExportsTool, PricesTool, ProductionTool,
    StorageTool, SummaryTool,
};
