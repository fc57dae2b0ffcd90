//! # Emission Factors
//!
//! Fixed multipliers converting physical quantities (kWh, km, kg of fuel)
//! into kg of CO₂ equivalent, plus the constants used to annualize the
//! user's inputs. All of these are process-wide and immutable.

/// Months per year, applied to the monthly electricity reading.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Weeks per year, applied to the weekly travel distance.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Assumed distance of a single flight.
pub const KM_PER_FLIGHT: f64 = 1000.0;

/// Mass of one LPG cylinder.
pub const LPG_CYLINDER_KG: f64 = 14.2;

/// Assumed cylinder consumption of an LPG-using household.
pub const LPG_CYLINDERS_PER_YEAR: f64 = 6.0;

/// Per-unit emission factors in kg CO₂.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactors {
    /// Per kWh of electricity.
    pub electricity: f64,
    /// Per km of ground travel.
    pub travel: f64,
    /// Per km of air travel.
    pub air_travel: f64,
    /// Per kg of LPG burned.
    pub lpg: f64,
}

impl EmissionFactors {
    pub const DEFAULT: EmissionFactors = EmissionFactors {
        electricity: 0.233,
        travel: 0.21,
        air_travel: 0.15,
        lpg: 2.98,
    };
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::DEFAULT
    }
}
