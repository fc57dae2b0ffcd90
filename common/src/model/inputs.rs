//! # Household Inputs
//!
//! Defines the four values a user supplies for an estimate:
//! * Monthly electricity use (kWh).
//! * Weekly travel distance by car/bus/bike (km).
//! * Number of flights in the last 3 months.
//! * Whether the household cooks with LPG.
//!
//! The constructors clamp out-of-range values so the calculator never has
//! to validate anything downstream: non-negative in, non-negative out.

use std::str::FromStr;

use crate::warn;

/// Whether the household uses LPG for cooking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpgUse {
    Yes,
    No,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid LPG answer '{0}', expected 'yes' or 'no'")]
pub struct ParseLpgUseError(String);

impl FromStr for LpgUse {
    type Err = ParseLpgUseError;

    /// Parses the binary choice, case-insensitively. Only "yes" and "no"
    /// are accepted; there is no third state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(LpgUse::Yes),
            "no" => Ok(LpgUse::No),
            _ => Err(ParseLpgUseError(s.to_string())),
        }
    }
}

impl LpgUse {
    pub fn is_yes(self) -> bool {
        self == LpgUse::Yes
    }
}

/// One interaction's worth of household data. Built per user action and
/// discarded after the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub electricity_kwh_per_month: f64,
    pub travel_km_per_week: f64,
    pub flights_last_quarter: u32,
    pub lpg: LpgUse,
}

impl Inputs {
    /// Builds a set of inputs, clamping negative readings to zero so the
    /// non-negativity invariant holds regardless of how the values were
    /// collected.
    pub fn new(electricity: f64, travel: f64, flights: u32, lpg: LpgUse) -> Self {
        Self {
            electricity_kwh_per_month: clamp_non_negative(electricity),
            travel_km_per_week: clamp_non_negative(travel),
            flights_last_quarter: flights,
            lpg,
        }
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerces free-text numeric entry to a usable reading. Non-numeric and
/// negative entries become 0, which is the entire validation contract of
/// the tool; the computation never sees an invalid value.
pub fn coerce_non_negative(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!("'{trimmed}' is not a non-negative number, using 0");
            0.0
        }
    }
}

/// Same contract as [`coerce_non_negative`] for whole-number entries
/// (flight counts).
pub fn coerce_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u32>() {
        Ok(count) => count,
        Err(_) => {
            warn!("'{trimmed}' is not a whole non-negative number, using 0");
            0
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lpg_use_parsing() {
        assert_eq!(LpgUse::from_str("yes"), Ok(LpgUse::Yes));
        assert_eq!(LpgUse::from_str("no"), Ok(LpgUse::No));

        // Case-insensitive, surrounding whitespace ignored
        assert_eq!(LpgUse::from_str("YES"), Ok(LpgUse::Yes));
        assert_eq!(LpgUse::from_str(" No "), Ok(LpgUse::No));

        // Nothing else is a valid answer
        assert!(LpgUse::from_str("maybe").is_err());
        assert!(LpgUse::from_str("").is_err());
        assert!(LpgUse::from_str("y").is_err());
    }

    #[test]
    fn test_inputs_clamp_negative_readings() {
        let inputs = Inputs::new(-3.5, -10.0, 2, LpgUse::No);
        assert_eq!(inputs.electricity_kwh_per_month, 0.0);
        assert_eq!(inputs.travel_km_per_week, 0.0);
        assert_eq!(inputs.flights_last_quarter, 2);
    }

    #[test]
    fn test_inputs_keep_valid_readings() {
        let inputs = Inputs::new(300.0, 50.0, 0, LpgUse::Yes);
        assert_eq!(inputs.electricity_kwh_per_month, 300.0);
        assert_eq!(inputs.travel_km_per_week, 50.0);
        assert!(inputs.lpg.is_yes());
    }

    #[test]
    fn test_coerce_non_negative() {
        assert_eq!(coerce_non_negative("300"), 300.0);
        assert_eq!(coerce_non_negative("  12.5 "), 12.5);
        assert_eq!(coerce_non_negative("0"), 0.0);

        // The only validation contract: bad entries become 0
        assert_eq!(coerce_non_negative("-4"), 0.0);
        assert_eq!(coerce_non_negative("abc"), 0.0);
        assert_eq!(coerce_non_negative(""), 0.0);
        assert_eq!(coerce_non_negative("NaN"), 0.0);
        assert_eq!(coerce_non_negative("inf"), 0.0);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("2"), 2);
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("-1"), 0);
        assert_eq!(coerce_count("1.5"), 0);
        assert_eq!(coerce_count("two"), 0);
    }
}
