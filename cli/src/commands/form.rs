use anyhow::bail;
use colored::*;
use console::Term;
use footprintr_common::config::Config;
use footprintr_common::model::factors::EmissionFactors;
use footprintr_common::model::inputs::Inputs;
use footprintr_core::report::Report;

use crate::commands::estimate;
use crate::fprint;
use crate::terminal::input::{self, FormAction};
use crate::terminal::print;

/// Interactive mode: asks the four questions, shows the results, then
/// waits. Enter re-runs the whole form from scratch; nothing carries over
/// between rounds.
pub fn run(cfg: &Config) -> anyhow::Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("'form' needs an interactive terminal; use 'estimate' with flags instead");
    }

    loop {
        print::header("enter your household data", cfg.quiet);
        let electricity = input::prompt_reading(&term, "Monthly Electricity Use (kWh)")?;
        let travel = input::prompt_reading(&term, "Weekly Travel Distance by Car/Bus/Bike (km)")?;
        let flights = input::prompt_count(&term, "No. of Flights in Last 3 Months")?;
        let lpg = input::prompt_lpg(&term, "Do you use LPG for cooking? (yes/no)")?;

        let inputs = Inputs::new(electricity, travel, flights, lpg);
        let report = Report::build(inputs, &EmissionFactors::default());

        fprint!();
        estimate::render(&report, cfg);

        fprint!();
        print::print_status(format!(
            "{}",
            "Press Enter to start over, q to quit".italic().white()
        ));
        if input::wait_for_action()? == FormAction::Quit {
            break;
        }
        fprint!();
    }

    Ok(())
}
