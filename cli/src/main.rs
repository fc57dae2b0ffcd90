mod commands;
mod terminal;

use commands::{CommandLine, Commands, estimate, form, info};
use footprintr_common::config::Config;
use footprintr_common::model::inputs::Inputs;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);
    print::banner(commands.no_banner, commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_chart: commands.no_chart,
    };

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Form => form::run(&cfg),
        Commands::Estimate {
            electricity,
            travel,
            flights,
            lpg,
        } => {
            let inputs = Inputs::new(electricity, travel, flights, lpg);
            estimate::estimate(inputs, &cfg)
        }
    }
}
