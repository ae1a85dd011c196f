//! Electricity tools.
//!
//! One file per tool, each mapping onto one family of routes under the
//! upstream `electricity/` category.

pub mod facility_fuel;
pub mod generator_capacity;
pub mod operational_data;
pub mod retail_sales;
pub mod rto;
pub mod state_profiles;

pub use facility_fuel::FacilityFuelTool;
pub use generator_capacity::GeneratorCapacityTool;
pub use operational_data::OperationalDataTool;
pub use retail_sales::RetailSalesTool;
pub use rto::RtoTool;
pub use state_profiles::StateProfilesTool;
