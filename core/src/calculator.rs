//! The emission calculator.
//!
//! A pure function from one interaction's inputs to an annual per-category
//! breakdown. There is no error path: the input constructors guarantee
//! non-negative values, and every factor is a non-negative constant, so
//! every emission value comes out ≥ 0.

use footprintr_common::model::breakdown::EmissionBreakdown;
use footprintr_common::model::factors::{
    self, EmissionFactors, KM_PER_FLIGHT, LPG_CYLINDER_KG, LPG_CYLINDERS_PER_YEAR,
};
use footprintr_common::model::inputs::Inputs;
use tracing::debug;

/// Applies the emission factors to the annualized inputs.
///
/// The flight count covers the last 3 months but is intentionally not
/// scaled to a full year; each flight is assumed to be [`KM_PER_FLIGHT`]
/// km. The LPG term is a fixed annual cylinder-equivalent mass and does
/// not depend on any other input.
pub fn estimate(inputs: &Inputs, emission_factors: &EmissionFactors) -> EmissionBreakdown {
    let annual_electricity_kwh = inputs.electricity_kwh_per_month * factors::MONTHS_PER_YEAR;
    let annual_travel_km = inputs.travel_km_per_week * factors::WEEKS_PER_YEAR;
    let annual_air_km = f64::from(inputs.flights_last_quarter) * KM_PER_FLIGHT;
    let lpg_annual_kg = if inputs.lpg.is_yes() {
        LPG_CYLINDER_KG * LPG_CYLINDERS_PER_YEAR
    } else {
        0.0
    };

    debug!(
        annual_electricity_kwh,
        annual_travel_km, annual_air_km, lpg_annual_kg, "annualized quantities"
    );

    EmissionBreakdown::new(
        annual_electricity_kwh * emission_factors.electricity,
        annual_travel_km * emission_factors.travel,
        annual_air_km * emission_factors.air_travel,
        lpg_annual_kg * emission_factors.lpg,
    )
}
