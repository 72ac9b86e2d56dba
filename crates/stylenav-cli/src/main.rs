//! stylenav CLI - jump from a CSS module import to its stylesheet.
//!
//! Parses arguments, loads settings, initializes logging and dispatches the
//! command.

use clap::Parser;
use miette::Result;
use stylenav_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    ui::init_colors(args.no_color);

    let result = commands::load_settings(&args).and_then(|settings| {
        logger::init_logger(
            args.verbose,
            args.quiet,
            args.no_color,
            settings.log_level.as_deref(),
        );

        match args.command {
            cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, &settings),
            cli::Command::Line(line_args) => commands::line_execute(line_args, &settings),
            cli::Command::Aliases(aliases_args) => {
                commands::aliases_execute(aliases_args, &settings)
            }
        }
    });

    result.map_err(error::cli_error_to_miette)
}
