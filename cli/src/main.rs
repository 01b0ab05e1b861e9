mod commands;
mod terminal;

use cidrkit_common::config::Config;
use commands::{CommandLine, Commands, contains, show};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(commands.verbose);

    let q_level = commands.quiet;

    match commands.command {
        Commands::Show {
            addresses,
            presentation,
        } => {
            let cfg = Config {
                options: presentation.options(),
                q_level,
            };
            print::header("parsed addresses", cfg.q_level);
            show::show(&addresses, &cfg)
        }
        Commands::Contains {
            subnet,
            addresses,
            presentation,
        } => {
            let cfg = Config {
                options: presentation.options(),
                q_level,
            };
            print::header("subnet containment", cfg.q_level);
            contains::contains(&subnet, &addresses, &cfg)
        }
    }
}
