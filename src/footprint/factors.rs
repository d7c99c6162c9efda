//! Emission factors and activity-field metadata.
//!
//! The factor values are the wire format of this domain: reports produced
//! here are compared against reports produced by older deployments, so the
//! constants must stay identical to the published Indian factor set.

/// Kg CO2e per kg of LPG burned.
pub const LPG: f64 = 2.983;
/// Kg CO2e per liter of diesel.
pub const DIESEL: f64 = 2.68;
/// Kg CO2e per liter of petrol.
pub const PETROL: f64 = 2.31;
/// Kg CO2e per kg of refrigerant leaked (high-GWP blend average).
pub const REFRIGERANT: f64 = 1300.0;
/// Kg CO2e per kWh of grid electricity.
pub const ELECTRICITY: f64 = 0.82;
/// Kg CO2e per kg of rice.
pub const RICE: f64 = 2.7;
/// Kg CO2e per kg of lentils.
pub const LENTILS: f64 = 0.9;
/// Kg CO2e per kg of vegetables.
pub const VEGETABLES: f64 = 0.5;
/// Kg CO2e per liter of milk.
pub const MILK: f64 = 1.4;
/// Kg CO2e per kg of ghee.
pub const GHEE: f64 = 8.0;
/// Kg CO2e per kg of spices.
pub const SPICES: f64 = 1.5;
/// Kg CO2e per liter of cooking oil.
pub const OIL: f64 = 3.3;
/// Kg CO2e per kg of food waste sent to landfill.
pub const FOOD_WASTE: f64 = 1.9;
/// Kg CO2e per kg of packaging waste.
pub const PACKAGING: f64 = 2.5;
/// Kg CO2e per km of upstream ingredient transport.
pub const TRANSPORT: f64 = 0.15;
/// Kg CO2e per km of staff commute.
pub const COMMUTE: f64 = 0.12;
/// Kg CO2e per km of business travel.
pub const BUSINESS_TRAVEL: f64 = 0.15;
/// Kg CO2e per third-party delivery order.
pub const DELIVERY: f64 = 0.3;
/// Kg CO2e per customer visit.
pub const CUSTOMER_VISIT: f64 = 0.2;
/// Kg CO2e per takeaway container.
pub const TAKEAWAY_CONTAINER: f64 = 0.05;

/// The factor table as `(name, factor, unit)` rows, for the reference
/// endpoint the shell renders on its information page.
pub const FACTOR_LISTING: [(&str, f64, &str); 20] = [
    ("lpg", LPG, "kg CO2e/kg"),
    ("diesel", DIESEL, "kg CO2e/liter"),
    ("petrol", PETROL, "kg CO2e/liter"),
    ("refrigerant", REFRIGERANT, "kg CO2e/kg"),
    ("electricity", ELECTRICITY, "kg CO2e/kWh"),
    ("rice", RICE, "kg CO2e/kg"),
    ("lentils", LENTILS, "kg CO2e/kg"),
    ("vegetables", VEGETABLES, "kg CO2e/kg"),
    ("milk", MILK, "kg CO2e/liter"),
    ("ghee", GHEE, "kg CO2e/kg"),
    ("spices", SPICES, "kg CO2e/kg"),
    ("oil", OIL, "kg CO2e/liter"),
    ("food_waste", FOOD_WASTE, "kg CO2e/kg"),
    ("packaging", PACKAGING, "kg CO2e/kg"),
    ("transport", TRANSPORT, "kg CO2e/km"),
    ("commute", COMMUTE, "kg CO2e/km"),
    ("business_travel", BUSINESS_TRAVEL, "kg CO2e/km"),
    ("delivery", DELIVERY, "kg CO2e/order"),
    ("customer_visit", CUSTOMER_VISIT, "kg CO2e/visit"),
    ("takeaway_container", TAKEAWAY_CONTAINER, "kg CO2e/container"),
];

/// Metadata for one activity-record field.
#[derive(Debug)]
pub struct FieldSpec {
    /// Canonical field name, matching wire payloads and upload headers.
    pub name: &'static str,
    /// Human-readable label used in exports.
    pub label: &'static str,
    /// Unit shown in validation messages.
    pub unit: &'static str,
    /// Lower bound of the typical range (zero for every field).
    pub min: f64,
    /// Upper bound of the typical range; above it is suspicious, not fatal.
    pub max: f64,
    /// Whole-number count field.
    pub integer: bool,
    /// Primary driver: a zero value is flagged for verification.
    pub primary: bool,
}

const fn spec(
    name: &'static str,
    label: &'static str,
    unit: &'static str,
    max: f64,
    integer: bool,
    primary: bool,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        unit,
        min: 0.0,
        max,
        integer,
        primary,
    }
}

/// Every activity field in canonical order: scope 1 sources, then scope 2,
/// then the value chain. Builder fill order, validator check order, and
/// export row order all follow this table.
pub const FIELDS: [FieldSpec; 22] = [
    spec("lpg_used", "LPG used (kg/year)", "kg", 2000.0, false, true),
    spec("generator_fuel", "Generator fuel (liters/year)", "L", 1000.0, false, false),
    spec("refrigerant_leak", "Refrigerant leakage (kg/year)", "kg", 50.0, false, false),
    spec("owned_vehicle_fuel", "Owned vehicle fuel (liters/year)", "L", 2000.0, false, false),
    spec("electricity", "Electricity (kWh/year)", "kWh", 50000.0, false, true),
    spec("chilled_water", "Chilled water or steam (kWh/year)", "kWh", 5000.0, false, false),
    spec("rice_kg", "Rice purchased (kg/year)", "kg", 10000.0, false, true),
    spec("lentils_kg", "Lentils purchased (kg/year)", "kg", 2000.0, false, false),
    spec("vegetables_kg", "Vegetables purchased (kg/year)", "kg", 10000.0, false, true),
    spec("milk_liters", "Milk purchased (liters/year)", "L", 5000.0, false, false),
    spec("ghee_kg", "Ghee purchased (kg/year)", "kg", 1000.0, false, false),
    spec("spices_kg", "Spices purchased (kg/year)", "kg", 500.0, false, false),
    spec("oil_liters", "Cooking oil purchased (liters/year)", "L", 2000.0, false, false),
    spec("upstream_transport_km", "Upstream transport (km/year)", "km", 50000.0, false, false),
    spec("food_waste_kg", "Food waste (kg/year)", "kg", 2000.0, false, false),
    spec("packaging_waste_kg", "Packaging waste (kg/year)", "kg", 1000.0, false, false),
    spec("staff_count", "Staff count", "people", 50.0, true, false),
    spec("avg_commute_km", "Average staff commute (km, one way)", "km", 50.0, false, false),
    spec("business_travel_km", "Business travel (km/year)", "km", 1000.0, false, false),
    spec("third_party_deliveries", "Delivery orders/year", "orders", 20000.0, true, false),
    spec("customer_visits", "Customer visits/year", "visits", 100000.0, true, false),
    spec("takeaway_containers", "Takeaway containers used/year", "containers", 50000.0, true, false),
];
