#![cfg(test)]
use footprintr_common::model::breakdown::Category;
use footprintr_common::model::factors::EmissionFactors;
use footprintr_common::model::inputs::{Inputs, LpgUse};
use footprintr_core::report::Report;

const TOLERANCE: f64 = 1e-6;

/// Worked example: an average household that neither flies nor cooks with
/// LPG. Every category value and the total are pinned to the exact
/// factor arithmetic.
#[test]
fn household_without_flights_or_lpg() {
    let inputs = Inputs::new(300.0, 50.0, 0, LpgUse::No);
    let report = Report::build(inputs, &EmissionFactors::default());

    let electricity = report.breakdown.value(Category::Electricity);
    assert!(
        (electricity - 838.8).abs() < TOLERANCE,
        "electricity emissions off: {electricity}"
    );

    let travel = report.breakdown.value(Category::Travel);
    assert!(
        (travel - 546.0).abs() < TOLERANCE,
        "travel emissions off: {travel}"
    );

    assert_eq!(report.breakdown.value(Category::AirTravel), 0.0);
    assert_eq!(report.breakdown.value(Category::Lpg), 0.0);
    assert!(
        (report.total_kg_co2 - 1384.8).abs() < TOLERANCE,
        "total off: {}",
        report.total_kg_co2
    );

    assert_eq!(report.tips.len(), 3, "unexpected tip count without flights");
}

/// Worked example: flights and LPG only. The air term is 2 × 1000 km ×
/// 0.15 and the LPG term is the fixed cylinder constant.
#[test]
fn household_flights_and_lpg_only() {
    let inputs = Inputs::new(0.0, 0.0, 2, LpgUse::Yes);
    let report = Report::build(inputs, &EmissionFactors::default());

    let air = report.breakdown.value(Category::AirTravel);
    assert!((air - 300.0).abs() < TOLERANCE, "air emissions off: {air}");

    let lpg = report.breakdown.value(Category::Lpg);
    assert!((lpg - 253.896).abs() < TOLERANCE, "lpg emissions off: {lpg}");

    assert!(
        (report.total_kg_co2 - 553.896).abs() < TOLERANCE,
        "total off: {}",
        report.total_kg_co2
    );

    assert_eq!(report.tips.len(), 4, "flight tip missing");
    assert_eq!(
        report.tips[2], "Reduce air travel when possible.",
        "flight tip not at its fixed position"
    );
}

/// Boundary: everything zero gives a total of exactly 0.0 and the base
/// tip list.
#[test]
fn all_zero_household() {
    let inputs = Inputs::new(0.0, 0.0, 0, LpgUse::No);
    let report = Report::build(inputs, &EmissionFactors::default());

    assert_eq!(report.total_kg_co2, 0.0);
    for (category, value) in report.breakdown.iter() {
        assert_eq!(value, 0.0, "{:?} not zero", category);
    }
    assert_eq!(report.tips.len(), 3);
}

/// The LPG term never depends on any other input.
#[test]
fn lpg_term_is_constant_across_households() {
    let factors = EmissionFactors::default();
    let baseline =
        Report::build(Inputs::new(0.0, 0.0, 0, LpgUse::Yes), &factors).breakdown;

    for (electricity, travel, flights) in [(500.0, 0.0, 0), (0.0, 400.0, 12), (77.7, 8.1, 3)] {
        let report = Report::build(
            Inputs::new(electricity, travel, flights, LpgUse::Yes),
            &factors,
        );
        assert_eq!(
            report.breakdown.value(Category::Lpg),
            baseline.value(Category::Lpg),
            "lpg term moved with other inputs"
        );
    }
}

/// Re-running the whole pipeline with identical inputs yields identical
/// output, the show-results trigger being idempotent.
#[test]
fn pipeline_is_idempotent() {
    let factors = EmissionFactors::default();
    let inputs = Inputs::new(432.1, 67.8, 5, LpgUse::Yes);

    let first = Report::build(inputs, &factors);
    let second = Report::build(inputs, &factors);

    assert_eq!(first, second, "identical inputs produced different reports");
}
