//! Reduction tips shown under the results.
//!
//! Selection is deterministic: a fixed base list, plus a flight-specific
//! tip spliced in at a fixed position for households that flew recently.

const BASE_TIPS: [&str; 3] = [
    "Turn off unused lights and appliances.",
    "Prefer walking, cycling, or public transport.",
    "Use efficient cooking practices to save LPG.",
];

const FLIGHT_TIP: &str = "Reduce air travel when possible.";

/// Position the flight tip takes in the list when it applies.
const FLIGHT_TIP_INDEX: usize = 2;

/// Picks the tips for a household, in render order. Three generic tips,
/// with the flight tip inserted before the LPG tip when any flights were
/// reported.
pub fn select(flights_last_quarter: u32) -> Vec<&'static str> {
    let mut tips: Vec<&'static str> = BASE_TIPS.to_vec();
    if flights_last_quarter > 0 {
        tips.insert(FLIGHT_TIP_INDEX, FLIGHT_TIP);
    }
    tips
}
