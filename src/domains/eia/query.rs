//! Query builder: maps a tool name plus a loose argument bag onto a
//! normalized EIA v2 request.
//!
//! Each tool is described by a static [`ToolRule`] naming its endpoint,
//! its argument-to-facet translation, and its default data columns. The
//! same logical argument can map to different upstream facet keys per
//! tool and even per route within one tool (state-electricity-profiles
//! expects `stateid` for the emissions route and `state` everywhere
//! else), so the whole mapping lives in one table instead of being
//! scattered across the tool handlers. A wrong facet key does not fail
//! upstream, it silently returns the wrong rows.

use serde_json::Value;

use super::error::EiaError;

/// Arguments as supplied by the MCP client: a loose string-keyed bag.
///
/// Readers tolerate missing or wrong-typed values; unrecognized keys are
/// ignored rather than rejected.
pub type ToolArguments = serde_json::Map<String, Value>;

/// Pagination length used when the caller does not supply `limit`.
///
/// The upstream maximum is 5000, but an out-of-range value is forwarded
/// as-is rather than clamped.
pub const DEFAULT_LENGTH: u64 = 100;

/// The closed set of tools this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    ElectricityRetailSales,
    ElectricityOperationalData,
    ElectricityRto,
    ElectricityStateProfiles,
    ElectricityGeneratorCapacity,
    ElectricityFacilityFuel,
    NaturalGasSummary,
    NaturalGasPrices,
    NaturalGasExplorationReserves,
    NaturalGasProduction,
    NaturalGasImportsExports,
    NaturalGasStorage,
    NaturalGasConsumption,
    ExploreRoutes,
}

impl ToolName {
    /// Every tool in the catalog, in registration order.
    pub const ALL: [ToolName; 14] = [
        ToolName::ElectricityRetailSales,
        ToolName::ElectricityOperationalData,
        ToolName::ElectricityRto,
        ToolName::ElectricityStateProfiles,
        ToolName::ElectricityGeneratorCapacity,
        ToolName::ElectricityFacilityFuel,
        ToolName::NaturalGasSummary,
        ToolName::NaturalGasPrices,
        ToolName::NaturalGasExplorationReserves,
        ToolName::NaturalGasProduction,
        ToolName::NaturalGasImportsExports,
        ToolName::NaturalGasStorage,
        ToolName::NaturalGasConsumption,
        ToolName::ExploreRoutes,
    ];

    /// The tool name as registered with the MCP client.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::ElectricityRetailSales => "eia_electricity_retail_sales",
            ToolName::ElectricityOperationalData => "eia_electricity_operational_data",
            ToolName::ElectricityRto => "eia_electricity_rto",
            ToolName::ElectricityStateProfiles => "eia_electricity_state_profiles",
            ToolName::ElectricityGeneratorCapacity => "eia_electricity_generator_capacity",
            ToolName::ElectricityFacilityFuel => "eia_electricity_facility_fuel",
            ToolName::NaturalGasSummary => "eia_natural_gas_summary",
            ToolName::NaturalGasPrices => "eia_natural_gas_prices",
            ToolName::NaturalGasExplorationReserves => "eia_natural_gas_exploration_reserves",
            ToolName::NaturalGasProduction => "eia_natural_gas_production",
            ToolName::NaturalGasImportsExports => "eia_natural_gas_imports_exports",
            ToolName::NaturalGasStorage => "eia_natural_gas_storage",
            ToolName::NaturalGasConsumption => "eia_natural_gas_consumption",
            ToolName::ExploreRoutes => "eia_explore_routes",
        }
    }

    /// Look up a tool by its registered name.
    pub fn parse(name: &str) -> Result<Self, EiaError> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| EiaError::UnknownTool(name.to_string()))
    }
}

/// One sort directive, rendered as `sort[<i>][column]` / `sort[<i>][direction]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub column: String,
    pub direction: String,
}

/// A fully-formed request descriptor, built fresh per tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Endpoint path below the API base. Empty only for the metadata
    /// tool exploring the catalog root.
    pub endpoint: String,

    /// Data columns to request, rendered as repeated `data[]=` keys.
    pub data_columns: Vec<String>,

    /// Facet filters in insertion order, rendered as repeated
    /// `facets[<name>][]=` keys. Empty facet sets are simply absent.
    pub facets: Vec<(String, Vec<String>)>,

    pub frequency: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Vec<SortDirective>,

    pub offset: u64,
    pub length: u64,

    /// When set, the executor targets the bare endpoint instead of its
    /// `/data` sibling and the response is route metadata, not records.
    pub metadata_only: bool,
}

impl QuerySpec {
    /// Render every query pair except the credential and pagination
    /// keys, which the executor injects.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for column in &self.data_columns {
            pairs.push(("data[]".to_string(), column.clone()));
        }
        for (facet, values) in &self.facets {
            for value in values {
                pairs.push((format!("facets[{facet}][]"), value.clone()));
            }
        }
        if let Some(frequency) = &self.frequency {
            pairs.push(("frequency".to_string(), frequency.clone()));
        }
        if let Some(start) = &self.start {
            pairs.push(("start".to_string(), start.clone()));
        }
        if let Some(end) = &self.end {
            pairs.push(("end".to_string(), end.clone()));
        }
        for (i, directive) in self.sort.iter().enumerate() {
            pairs.push((format!("sort[{i}][column]"), directive.column.clone()));
            pairs.push((format!("sort[{i}][direction]"), directive.direction.clone()));
        }
        pairs
    }
}

/// One argument-to-facet translation: the named argument, when present
/// and non-empty, becomes a single-valued facet under the upstream key.
struct FacetRule {
    arg: &'static str,
    facet: &'static str,
}

/// Static description of how one data tool's arguments become a request.
struct ToolRule {
    /// Endpoint path, without any route suffix.
    endpoint: &'static str,

    /// Route appended to the endpoint. `Some` holds the default used
    /// when the caller omits `route`; `None` means the tool has no
    /// route segment and a caller-supplied `route` is ignored.
    default_route: Option<&'static str>,

    /// Argument-to-facet translation for all routes without an override.
    facets: &'static [FacetRule],

    /// Per-route facet overrides, consulted before `facets`.
    route_facets: &'static [(&'static str, &'static [FacetRule])],

    /// Data columns requested when the caller supplies none.
    default_columns: &'static [&'static str],

    /// Per-route default-column overrides.
    route_columns: &'static [(&'static str, &'static [&'static str])],

    /// Whether the upstream series accepts a `frequency` filter.
    frequency: bool,
}

const RETAIL_SALES: ToolRule = ToolRule {
    endpoint: "electricity/retail-sales",
    default_route: None,
    facets: &[
        FacetRule { arg: "state", facet: "stateid" },
        FacetRule { arg: "sector", facet: "sectorid" },
    ],
    route_facets: &[],
    default_columns: &["revenue", "sales", "price", "customers"],
    route_columns: &[],
    frequency: true,
};

const OPERATIONAL_DATA: ToolRule = ToolRule {
    endpoint: "electricity/electric-power-operational-data",
    default_route: None,
    facets: &[
        FacetRule { arg: "state", facet: "location" },
        FacetRule { arg: "fuel_type", facet: "fueltypeid" },
    ],
    route_facets: &[],
    default_columns: &["generation", "total-consumption"],
    route_columns: &[],
    frequency: true,
};

const RTO: ToolRule = ToolRule {
    endpoint: "electricity/rto",
    default_route: Some("region-data"),
    facets: &[
        FacetRule { arg: "respondent", facet: "respondent" },
        FacetRule { arg: "fuel_type", facet: "fueltype" },
    ],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    // Hourly/daily series; the RTO routes take no frequency filter.
    frequency: false,
};

const STATE_PROFILES: ToolRule = ToolRule {
    endpoint: "electricity/state-electricity-profiles",
    default_route: Some("source-disposition"),
    facets: &[FacetRule { arg: "state", facet: "state" }],
    // The emissions route is the one place upstream expects `stateid`.
    route_facets: &[(
        "emissions-by-state-by-fuel",
        &[FacetRule { arg: "state", facet: "stateid" }],
    )],
    default_columns: &["value"],
    route_columns: &[
        (
            "emissions-by-state-by-fuel",
            &["co2-thousand-metric-tons", "so2-short-tons", "nox-short-tons"],
        ),
        (
            "source-disposition",
            &[
                "electric-utilities",
                "independent-power-producers",
                "combined-heat-and-pwr-elect",
            ],
        ),
        ("capability", &["capability"]),
    ],
    frequency: false,
};

const GENERATOR_CAPACITY: ToolRule = ToolRule {
    endpoint: "electricity/operating-generator-capacity",
    default_route: None,
    facets: &[
        FacetRule { arg: "state", facet: "stateid" },
        FacetRule { arg: "status", facet: "status" },
        FacetRule { arg: "technology", facet: "technology" },
        FacetRule { arg: "energy_source", facet: "energy_source_code" },
    ],
    route_facets: &[],
    default_columns: &["nameplate-capacity-mw", "net-summer-capacity-mw"],
    route_columns: &[],
    frequency: false,
};

const FACILITY_FUEL: ToolRule = ToolRule {
    endpoint: "electricity/facility-fuel",
    default_route: None,
    facets: &[
        FacetRule { arg: "state", facet: "state" },
        FacetRule { arg: "plant_id", facet: "plantCode" },
        FacetRule { arg: "fuel_type", facet: "fuel2002" },
    ],
    route_facets: &[],
    default_columns: &["generation", "gross-generation", "total-consumption"],
    route_columns: &[],
    frequency: true,
};

// The summary survey only serves records under the snd sub-route.
const NG_SUMMARY: ToolRule = ToolRule {
    endpoint: "natural-gas/sum/snd",
    default_route: None,
    facets: &[FacetRule { arg: "series", facet: "series" }],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    frequency: true,
};

const NG_PRICES: ToolRule = ToolRule {
    endpoint: "natural-gas/pri",
    default_route: Some("sum"),
    facets: &[
        FacetRule { arg: "area", facet: "duoarea" },
        FacetRule { arg: "product", facet: "product" },
    ],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    frequency: true,
};

const NG_EXPLORATION_RESERVES: ToolRule = ToolRule {
    endpoint: "natural-gas/enr",
    default_route: Some("wellend"),
    facets: &[FacetRule { arg: "area", facet: "duoarea" }],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    frequency: true,
};

const NG_PRODUCTION: ToolRule = ToolRule {
    endpoint: "natural-gas/prod",
    default_route: Some("sum"),
    facets: &[
        FacetRule { arg: "area", facet: "duoarea" },
        FacetRule { arg: "product", facet: "product" },
    ],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    frequency: true,
};

const NG_IMPORTS_EXPORTS: ToolRule = ToolRule {
    endpoint: "natural-gas/move",
    default_route: Some("state"),
    facets: &[
        FacetRule { arg: "area", facet: "duoarea" },
        FacetRule { arg: "country", facet: "countrynd" },
    ],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    frequency: true,
};

const NG_STORAGE: ToolRule = ToolRule {
    endpoint: "natural-gas/stor",
    default_route: Some("sum"),
    facets: &[FacetRule { arg: "area", facet: "duoarea" }],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    frequency: true,
};

const NG_CONSUMPTION: ToolRule = ToolRule {
    endpoint: "natural-gas/cons",
    default_route: Some("sum"),
    facets: &[
        FacetRule { arg: "area", facet: "duoarea" },
        FacetRule { arg: "sector", facet: "process" },
    ],
    route_facets: &[],
    default_columns: &["value"],
    route_columns: &[],
    frequency: true,
};

/// The rule for a data tool; `None` for the metadata exploration tool,
/// which bypasses the table entirely.
fn rule_for(tool: ToolName) -> Option<&'static ToolRule> {
    match tool {
        ToolName::ElectricityRetailSales => Some(&RETAIL_SALES),
        ToolName::ElectricityOperationalData => Some(&OPERATIONAL_DATA),
        ToolName::ElectricityRto => Some(&RTO),
        ToolName::ElectricityStateProfiles => Some(&STATE_PROFILES),
        ToolName::ElectricityGeneratorCapacity => Some(&GENERATOR_CAPACITY),
        ToolName::ElectricityFacilityFuel => Some(&FACILITY_FUEL),
        ToolName::NaturalGasSummary => Some(&NG_SUMMARY),
        ToolName::NaturalGasPrices => Some(&NG_PRICES),
        ToolName::NaturalGasExplorationReserves => Some(&NG_EXPLORATION_RESERVES),
        ToolName::NaturalGasProduction => Some(&NG_PRODUCTION),
        ToolName::NaturalGasImportsExports => Some(&NG_IMPORTS_EXPORTS),
        ToolName::NaturalGasStorage => Some(&NG_STORAGE),
        ToolName::NaturalGasConsumption => Some(&NG_CONSUMPTION),
        ToolName::ExploreRoutes => None,
    }
}

/// Structural sanity check over the rule table, run once at startup and
/// again from the test suite.
pub fn validate_rules() -> Result<(), String> {
    for tool in ToolName::ALL {
        let Some(rule) = rule_for(tool) else {
            continue;
        };
        let name = tool.as_str();
        if rule.endpoint.is_empty() {
            return Err(format!("{name}: empty endpoint"));
        }
        if rule.default_columns.is_empty() {
            return Err(format!("{name}: no default data columns"));
        }
        if rule.default_route.is_none()
            && (!rule.route_facets.is_empty() || !rule.route_columns.is_empty())
        {
            return Err(format!("{name}: route overrides on a routeless tool"));
        }
        if rule
            .route_facets
            .iter()
            .map(|(route, _)| route)
            .chain(rule.route_columns.iter().map(|(route, _)| route))
            .any(|route| route.is_empty())
        {
            return Err(format!("{name}: empty route key in override table"));
        }
    }
    Ok(())
}

/// Build the request descriptor for one tool call.
///
/// Deterministic: identical inputs always yield identical descriptors.
pub fn build_query(tool_name: &str, args: &ToolArguments) -> Result<QuerySpec, EiaError> {
    let tool = ToolName::parse(tool_name)?;

    if tool == ToolName::ExploreRoutes {
        // Metadata-only: bare path (possibly the catalog root), a single
        // record, and none of the data-query machinery.
        return Ok(QuerySpec {
            endpoint: arg_str(args, "path").unwrap_or_default(),
            data_columns: Vec::new(),
            facets: Vec::new(),
            frequency: None,
            start: None,
            end: None,
            sort: Vec::new(),
            offset: 0,
            length: 1,
            metadata_only: true,
        });
    }

    let Some(rule) = rule_for(tool) else {
        // Unreachable: the metadata tool returned above and every data
        // tool has a rule, which validate_rules() asserts.
        return Err(EiaError::UnknownTool(tool_name.to_string()));
    };

    let (endpoint, route) = match rule.default_route {
        Some(default) => {
            let route = arg_str(args, "route").unwrap_or_else(|| default.to_string());
            (format!("{}/{}", rule.endpoint, route), Some(route))
        }
        None => (rule.endpoint.to_string(), None),
    };

    let facet_rules = route
        .as_deref()
        .and_then(|route| {
            rule.route_facets
                .iter()
                .find(|(name, _)| *name == route)
                .map(|(_, rules)| *rules)
        })
        .unwrap_or(rule.facets);

    let mut facets = Vec::new();
    for facet_rule in facet_rules {
        if let Some(value) = arg_str(args, facet_rule.arg) {
            if !value.is_empty() {
                facets.push((facet_rule.facet.to_string(), vec![value]));
            }
        }
    }

    let data_columns = arg_str_list(args, "data_columns").unwrap_or_else(|| {
        route
            .as_deref()
            .and_then(|route| {
                rule.route_columns
                    .iter()
                    .find(|(name, _)| *name == route)
                    .map(|(_, columns)| *columns)
            })
            .unwrap_or(rule.default_columns)
            .iter()
            .map(|column| column.to_string())
            .collect()
    });

    let frequency = if rule.frequency {
        arg_str(args, "frequency").filter(|value| !value.is_empty())
    } else {
        None
    };

    Ok(QuerySpec {
        endpoint,
        data_columns,
        facets,
        frequency,
        start: arg_str(args, "start").filter(|value| !value.is_empty()),
        end: arg_str(args, "end").filter(|value| !value.is_empty()),
        sort: Vec::new(),
        offset: 0,
        length: arg_u64(args, "limit").unwrap_or(DEFAULT_LENGTH),
        metadata_only: false,
    })
}

fn arg_str(args: &ToolArguments, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}

fn arg_str_list(args: &ToolArguments, key: &str) -> Option<Vec<String>> {
    let values: Vec<String> = args
        .get(key)?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if values.is_empty() { None } else { Some(values) }
}

fn arg_u64(args: &ToolArguments, key: &str) -> Option<u64> {
    args.get(key)?.as_u64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: serde_json::Value) -> ToolArguments {
        value.as_object().cloned().expect("test args must be an object")
    }

    #[test]
    fn rule_table_is_valid() {
        validate_rules().expect("rule table should pass validation");
    }

    #[test]
    fn tool_names_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::parse(tool.as_str()).unwrap(), tool);
        }
    }

    #[test]
    fn unknown_tool_is_reported_with_its_name() {
        let err = build_query("eia_coal_production", &args(json!({}))).unwrap_err();
        match err {
            EiaError::UnknownTool(name) => assert_eq!(name, "eia_coal_production"),
            other => panic!("expected UnknownTool, got {other:?}"),
        }
    }

    #[test]
    fn retail_sales_defaults() {
        let query = build_query("eia_electricity_retail_sales", &args(json!({}))).unwrap();
        assert_eq!(query.endpoint, "electricity/retail-sales");
        assert_eq!(query.data_columns, ["revenue", "sales", "price", "customers"]);
        assert!(query.facets.is_empty());
        assert_eq!(query.length, 100);
        assert!(!query.metadata_only);
    }

    #[test]
    fn retail_sales_facets_and_filters() {
        let query = build_query(
            "eia_electricity_retail_sales",
            &args(json!({
                "state": "CA",
                "sector": "RES",
                "frequency": "monthly",
                "start": "2023-01",
                "end": "2023-12",
                "limit": 50,
            })),
        )
        .unwrap();
        assert_eq!(
            query.facets,
            vec![
                ("stateid".to_string(), vec!["CA".to_string()]),
                ("sectorid".to_string(), vec!["RES".to_string()]),
            ]
        );
        assert_eq!(query.frequency.as_deref(), Some("monthly"));
        assert_eq!(query.start.as_deref(), Some("2023-01"));
        assert_eq!(query.end.as_deref(), Some("2023-12"));
        assert_eq!(query.length, 50);
    }

    #[test]
    fn empty_string_arguments_are_omitted() {
        let query = build_query(
            "eia_electricity_retail_sales",
            &args(json!({ "state": "", "frequency": "" })),
        )
        .unwrap();
        assert!(query.facets.is_empty());
        assert!(query.frequency.is_none());
    }

    #[test]
    fn caller_columns_override_defaults() {
        let query = build_query(
            "eia_electricity_retail_sales",
            &args(json!({ "data_columns": ["price"] })),
        )
        .unwrap();
        assert_eq!(query.data_columns, ["price"]);
    }

    #[test]
    fn empty_column_list_falls_back_to_defaults() {
        let query = build_query(
            "eia_electricity_retail_sales",
            &args(json!({ "data_columns": [] })),
        )
        .unwrap();
        assert_eq!(query.data_columns, ["revenue", "sales", "price", "customers"]);
    }

    #[test]
    fn rto_defaults_to_region_data_route() {
        let query = build_query("eia_electricity_rto", &args(json!({}))).unwrap();
        assert_eq!(query.endpoint, "electricity/rto/region-data");
        assert_eq!(query.data_columns, ["value"]);
    }

    #[test]
    fn rto_route_and_respondent() {
        let query = build_query(
            "eia_electricity_rto",
            &args(json!({ "route": "fuel-type-data", "respondent": "CISO", "fuel_type": "SUN" })),
        )
        .unwrap();
        assert_eq!(query.endpoint, "electricity/rto/fuel-type-data");
        assert_eq!(
            query.facets,
            vec![
                ("respondent".to_string(), vec!["CISO".to_string()]),
                ("fueltype".to_string(), vec!["SUN".to_string()]),
            ]
        );
    }

    #[test]
    fn rto_ignores_frequency() {
        let query = build_query(
            "eia_electricity_rto",
            &args(json!({ "frequency": "hourly" })),
        )
        .unwrap();
        assert!(query.frequency.is_none());
    }

    #[test]
    fn state_profiles_emissions_route_uses_stateid() {
        let query = build_query(
            "eia_electricity_state_profiles",
            &args(json!({ "route": "emissions-by-state-by-fuel", "state": "CA" })),
        )
        .unwrap();
        assert_eq!(
            query.endpoint,
            "electricity/state-electricity-profiles/emissions-by-state-by-fuel"
        );
        assert_eq!(query.facets, vec![("stateid".to_string(), vec!["CA".to_string()])]);
        assert_eq!(
            query.data_columns,
            ["co2-thousand-metric-tons", "so2-short-tons", "nox-short-tons"]
        );
    }

    #[test]
    fn state_profiles_other_routes_use_state() {
        for route in ["source-disposition", "capability", "net-metering", "meters"] {
            let query = build_query(
                "eia_electricity_state_profiles",
                &args(json!({ "route": route, "state": "CA" })),
            )
            .unwrap();
            assert_eq!(
                query.facets,
                vec![("state".to_string(), vec!["CA".to_string()])],
                "route {route} should filter on the `state` facet"
            );
        }
    }

    #[test]
    fn state_profiles_default_route_and_columns() {
        let query = build_query("eia_electricity_state_profiles", &args(json!({}))).unwrap();
        assert_eq!(
            query.endpoint,
            "electricity/state-electricity-profiles/source-disposition"
        );
        assert_eq!(
            query.data_columns,
            [
                "electric-utilities",
                "independent-power-producers",
                "combined-heat-and-pwr-elect"
            ]
        );
    }

    #[test]
    fn state_profiles_unlisted_route_gets_value_column() {
        let query = build_query(
            "eia_electricity_state_profiles",
            &args(json!({ "route": "meters" })),
        )
        .unwrap();
        assert_eq!(query.data_columns, ["value"]);
    }

    #[test]
    fn generator_capacity_facet_keys() {
        let query = build_query(
            "eia_electricity_generator_capacity",
            &args(json!({
                "state": "TX",
                "status": "OP",
                "technology": "Solar Photovoltaic",
                "energy_source": "SUN",
            })),
        )
        .unwrap();
        assert_eq!(
            query.facets,
            vec![
                ("stateid".to_string(), vec!["TX".to_string()]),
                ("status".to_string(), vec!["OP".to_string()]),
                ("technology".to_string(), vec!["Solar Photovoltaic".to_string()]),
                ("energy_source_code".to_string(), vec!["SUN".to_string()]),
            ]
        );
        assert_eq!(
            query.data_columns,
            ["nameplate-capacity-mw", "net-summer-capacity-mw"]
        );
    }

    #[test]
    fn facility_fuel_plant_facet_is_camel_cased_upstream() {
        let query = build_query(
            "eia_electricity_facility_fuel",
            &args(json!({ "plant_id": "57915", "fuel_type": "NG" })),
        )
        .unwrap();
        assert_eq!(
            query.facets,
            vec![
                ("plantCode".to_string(), vec!["57915".to_string()]),
                ("fuel2002".to_string(), vec!["NG".to_string()]),
            ]
        );
    }

    #[test]
    fn natural_gas_summary_uses_snd_sub_route() {
        let query = build_query(
            "eia_natural_gas_summary",
            &args(json!({ "series": "N9010US2" })),
        )
        .unwrap();
        assert_eq!(query.endpoint, "natural-gas/sum/snd");
        assert_eq!(query.facets, vec![("series".to_string(), vec!["N9010US2".to_string()])]);
        assert_eq!(query.data_columns, ["value"]);
    }

    #[test]
    fn natural_gas_route_defaults() {
        let cases = [
            ("eia_natural_gas_prices", "natural-gas/pri/sum"),
            ("eia_natural_gas_exploration_reserves", "natural-gas/enr/wellend"),
            ("eia_natural_gas_production", "natural-gas/prod/sum"),
            ("eia_natural_gas_imports_exports", "natural-gas/move/state"),
            ("eia_natural_gas_storage", "natural-gas/stor/sum"),
            ("eia_natural_gas_consumption", "natural-gas/cons/sum"),
        ];
        for (tool, endpoint) in cases {
            let query = build_query(tool, &args(json!({}))).unwrap();
            assert_eq!(query.endpoint, endpoint, "default route for {tool}");
            assert_eq!(query.data_columns, ["value"], "default columns for {tool}");
        }
    }

    #[test]
    fn natural_gas_area_maps_to_duoarea() {
        let query = build_query(
            "eia_natural_gas_prices",
            &args(json!({ "area": "SCA", "product": "EPG0" })),
        )
        .unwrap();
        assert_eq!(
            query.facets,
            vec![
                ("duoarea".to_string(), vec!["SCA".to_string()]),
                ("product".to_string(), vec!["EPG0".to_string()]),
            ]
        );
    }

    #[test]
    fn natural_gas_consumption_sector_maps_to_process() {
        let query = build_query(
            "eia_natural_gas_consumption",
            &args(json!({ "sector": "RES", "area": "SCA" })),
        )
        .unwrap();
        assert_eq!(
            query.facets,
            vec![
                ("duoarea".to_string(), vec!["SCA".to_string()]),
                ("process".to_string(), vec!["RES".to_string()]),
            ]
        );
    }

    #[test]
    fn imports_exports_country_facet() {
        let query = build_query(
            "eia_natural_gas_imports_exports",
            &args(json!({ "route": "impc", "country": "Canada" })),
        )
        .unwrap();
        assert_eq!(query.endpoint, "natural-gas/move/impc");
        assert_eq!(query.facets, vec![("countrynd".to_string(), vec!["Canada".to_string()])]);
    }

    #[test]
    fn explore_routes_empty_path_targets_catalog_root() {
        let query = build_query("eia_explore_routes", &args(json!({ "path": "" }))).unwrap();
        assert_eq!(query.endpoint, "");
        assert_eq!(query.length, 1);
        assert!(query.metadata_only);
        assert!(query.data_columns.is_empty());
        assert!(query.facets.is_empty());
    }

    #[test]
    fn explore_routes_passes_path_through() {
        let query = build_query(
            "eia_explore_routes",
            &args(json!({ "path": "electricity/retail-sales" })),
        )
        .unwrap();
        assert_eq!(query.endpoint, "electricity/retail-sales");
        assert!(query.metadata_only);
    }

    #[test]
    fn limit_is_forwarded_unclamped() {
        // The upstream maximum is 5000, but the builder deliberately
        // does not enforce it.
        let query = build_query(
            "eia_natural_gas_storage",
            &args(json!({ "limit": 9000 })),
        )
        .unwrap();
        assert_eq!(query.length, 9000);
    }

    #[test]
    fn unrecognized_arguments_are_ignored() {
        let query = build_query(
            "eia_natural_gas_storage",
            &args(json!({ "area": "SCA", "favorite_color": "green" })),
        )
        .unwrap();
        assert_eq!(query.facets, vec![("duoarea".to_string(), vec!["SCA".to_string()])]);
    }

    #[test]
    fn building_twice_is_deterministic() {
        let input = args(json!({
            "state": "NY",
            "sector": "COM",
            "frequency": "annual",
            "limit": 250,
        }));
        let first = build_query("eia_electricity_retail_sales", &input).unwrap();
        let second = build_query("eia_electricity_retail_sales", &input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn query_pairs_render_brackets_and_order() {
        let query = QuerySpec {
            endpoint: "electricity/retail-sales".to_string(),
            data_columns: vec!["revenue".to_string(), "sales".to_string()],
            facets: vec![("stateid".to_string(), vec!["CA".to_string(), "TX".to_string()])],
            frequency: Some("monthly".to_string()),
            start: Some("2023-01".to_string()),
            end: None,
            sort: vec![SortDirective {
                column: "period".to_string(),
                direction: "desc".to_string(),
            }],
            offset: 0,
            length: 100,
            metadata_only: false,
        };
        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("data[]".to_string(), "revenue".to_string()),
                ("data[]".to_string(), "sales".to_string()),
                ("facets[stateid][]".to_string(), "CA".to_string()),
                ("facets[stateid][]".to_string(), "TX".to_string()),
                ("frequency".to_string(), "monthly".to_string()),
                ("start".to_string(), "2023-01".to_string()),
                ("sort[0][column]".to_string(), "period".to_string()),
                ("sort[0][direction]".to_string(), "desc".to_string()),
            ]
        );
    }
}
