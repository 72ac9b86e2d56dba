//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `stylenav resolve` - resolve one specifier from a given file
//! - `stylenav line` - resolve the import on a line of a file
//! - `stylenav aliases` - show the config and alias map for a directory

mod commands;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{AliasesArgs, Command, LineArgs, ResolveArgs, ScopeArgs};

/// stylenav - find the stylesheet behind a CSS module import
#[derive(Parser, Debug)]
#[command(
    name = "stylenav",
    version,
    about = "Find the stylesheet behind a CSS module import",
    long_about = "stylenav resolves CSS module imports (`.module.css`, `.module.scss`,\n\
                  `.module.sass`) to files on disk, following the path aliases declared\n\
                  in the nearest tsconfig.json or jsconfig.json."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows which config was used, every alias registered and the outcome
    /// of each resolution.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file to use instead of ./stylenav.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "stylenav",
            "resolve",
            "@/styles/a.module.css",
            "--from",
            "src/pages/Home.tsx",
            "-w",
            "/ws",
            "--strict",
        ]);

        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.specifier, "@/styles/a.module.css");
        assert_eq!(args.from, PathBuf::from("src/pages/Home.tsx"));
        assert_eq!(args.scope.workspace, vec![PathBuf::from("/ws")]);
        assert!(args.scope.strict);
    }

    #[test]
    fn test_parse_line_requires_positive_line() {
        assert!(Cli::try_parse_from(["stylenav", "line", "a.tsx", "--line", "0"]).is_err());

        let cli = Cli::parse_from(["stylenav", "line", "a.tsx", "--line", "3", "--verbose"]);
        assert!(cli.verbose);
        let Command::Line(args) = cli.command else {
            panic!("expected line");
        };
        assert_eq!(args.line, 3);
        assert!(!args.scope.strict);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["stylenav", "-v", "-q", "aliases", "."]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["stylenav", "aliases", "src", "--config", "alt.toml", "--json"]);

        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        let Command::Aliases(args) = cli.command else {
            panic!("expected aliases");
        };
        assert!(args.json);
    }
}
