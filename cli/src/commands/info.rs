use colored::*;
use footprintr_common::config::Config;
use footprintr_common::model::factors::{
    EmissionFactors, KM_PER_FLIGHT, LPG_CYLINDER_KG, LPG_CYLINDERS_PER_YEAR, MONTHS_PER_YEAR,
    WEEKS_PER_YEAR,
};

use crate::fprint;
use crate::terminal::{colors, print};

/// Prints what the tool does and the fixed numbers behind every estimate.
pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::print_status("Estimates a household's yearly carbon footprint from monthly");
    print::print_status("electricity use, weekly travel distance, recent flights, and");
    print::print_status("LPG cooking, using fixed per-unit emission factors.");

    let factors = EmissionFactors::default();

    fprint!();
    print::header("emission factors", cfg.quiet);
    print::set_key_width(&["Electricity", "Travel", "Air Travel", "LPG"]);
    print::aligned_line("Electricity", factor_value(factors.electricity, "kg CO₂/kWh"));
    print::aligned_line("Travel", factor_value(factors.travel, "kg CO₂/km"));
    print::aligned_line("Air Travel", factor_value(factors.air_travel, "kg CO₂/km"));
    print::aligned_line("LPG", factor_value(factors.lpg, "kg CO₂/kg fuel"));

    fprint!();
    print::header("assumptions", cfg.quiet);
    print::set_key_width(&[
        "Months per year",
        "Weeks per year",
        "Km per flight",
        "LPG cylinder mass",
        "Cylinders per year",
    ]);
    print::aligned_line("Months per year", factor_value(MONTHS_PER_YEAR, ""));
    print::aligned_line("Weeks per year", factor_value(WEEKS_PER_YEAR, ""));
    print::aligned_line("Km per flight", factor_value(KM_PER_FLIGHT, ""));
    print::aligned_line("LPG cylinder mass", factor_value(LPG_CYLINDER_KG, "kg"));
    print::aligned_line("Cylinders per year", factor_value(LPG_CYLINDERS_PER_YEAR, ""));

    print::end_of_program();
    Ok(())
}

fn factor_value(value: f64, unit: &str) -> ColoredString {
    let rendered = if unit.is_empty() {
        format!("{value}")
    } else {
        format!("{value} {unit}")
    };
    rendered.color(colors::VALUE)
}
