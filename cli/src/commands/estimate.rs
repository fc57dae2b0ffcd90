use colored::*;
use footprintr_common::config::Config;
use footprintr_common::model::breakdown::Category;
use footprintr_common::model::factors::EmissionFactors;
use footprintr_common::model::inputs::Inputs;
use footprintr_common::success;
use footprintr_core::report::Report;

use crate::fprint;
use crate::terminal::{chart, colors, print};

/// One-shot compute-and-render for a set of collected inputs. Re-running
/// with identical inputs produces identical output.
pub fn estimate(inputs: Inputs, cfg: &Config) -> anyhow::Result<()> {
    let report = Report::build(inputs, &EmissionFactors::default());
    render(&report, cfg);
    Ok(())
}

/// Renders a report: total, tips, breakdown, chart, in that order.
pub fn render(report: &Report, cfg: &Config) {
    print::header("results", cfg.quiet);
    let total: ColoredString = format!("{:.2} kg CO₂", report.total_kg_co2).bold().green();
    print::print_status(format!("Estimated Annual Carbon Footprint: {total}"));

    fprint!();
    print::header("tips to reduce emissions", cfg.quiet);
    for (idx, tip) in report.tips.iter().enumerate() {
        print::numbered_line(idx + 1, tip);
    }

    if cfg.quiet < 2 {
        fprint!();
        print::header("emissions breakdown", cfg.quiet);
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        print::set_key_width(&labels);
        for (category, value) in report.breakdown.iter() {
            let value: ColoredString = format!("{value:.2} kg CO₂/yr").color(colors::VALUE);
            print::aligned_line(category.label(), value);
        }

        if !cfg.no_chart {
            fprint!();
            chart::render(&report.breakdown);
        }
    }

    print_summary(report, cfg);
}

fn print_summary(report: &Report, cfg: &Config) {
    let total: ColoredString = format!("{:.2} kg CO₂/year", report.total_kg_co2)
        .bold()
        .yellow();
    let output: String = format!("Estimate complete: {total}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => {
            fprint!();
            success!("{}", output);
        }
    }
}
