//! Report assembly.
//!
//! The seam between collecting inputs and presenting results: the CLI
//! gathers an [`Inputs`], this module turns it into everything the
//! presenter needs, and neither side knows about the other.

use footprintr_common::model::breakdown::EmissionBreakdown;
use footprintr_common::model::factors::EmissionFactors;
use footprintr_common::model::inputs::Inputs;

use crate::{calculator, tips};

/// Everything one interaction produces. Immutable once built; a new
/// interaction builds a new report from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub inputs: Inputs,
    pub breakdown: EmissionBreakdown,
    pub total_kg_co2: f64,
    pub tips: Vec<&'static str>,
}

impl Report {
    /// Runs the full pipeline for one set of inputs.
    pub fn build(inputs: Inputs, factors: &EmissionFactors) -> Self {
        let breakdown = calculator::estimate(&inputs, factors);
        let total_kg_co2 = breakdown.total();
        let tips = tips::select(inputs.flights_last_quarter);

        Self {
            inputs,
            breakdown,
            total_kg_co2,
            tips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprintr_common::model::inputs::LpgUse;

    #[test]
    fn test_report_bundles_pipeline_output() {
        let inputs = Inputs::new(300.0, 50.0, 2, LpgUse::Yes);
        let report = Report::build(inputs, &EmissionFactors::default());

        assert_eq!(report.inputs, inputs);
        assert_eq!(report.total_kg_co2, report.breakdown.total());
        assert_eq!(report.tips.len(), 4);
    }

    #[test]
    fn test_identical_inputs_build_identical_reports() {
        let inputs = Inputs::new(120.0, 15.0, 0, LpgUse::No);
        let factors = EmissionFactors::default();

        assert_eq!(Report::build(inputs, &factors), Report::build(inputs, &factors));
    }
}
