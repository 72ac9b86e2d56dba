use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available stylenav subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a style module specifier
    ///
    /// Prints the absolute path of the stylesheet. Exits with status 1 and
    /// the aliases that were tried when nothing matches.
    ///
    /// Examples:
    ///   stylenav resolve @/styles/home.module.scss --from src/pages/Home.tsx
    ///   stylenav resolve ../Button --from src/pages/Home.tsx --strict
    Resolve(ResolveArgs),

    /// Resolve the style module import on one line of a file
    ///
    /// Examples:
    ///   stylenav line src/pages/Home.tsx --line 3
    Line(LineArgs),

    /// Show the config and alias map that apply to a directory
    ///
    /// Examples:
    ///   stylenav aliases src/pages
    ///   stylenav aliases . --json
    Aliases(AliasesArgs),
}

/// Options shared by every command that resolves.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Workspace root bounding the config search (repeatable)
    ///
    /// The first root containing the file is used. Defaults to the
    /// `workspace_roots` setting, then the current directory.
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Vec<PathBuf>,

    /// Disable the `../x` → `./x` retry for imports with the wrong depth
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Specifier as written in the import, e.g. `@/styles/home.module.scss`
    #[arg(value_name = "SPECIFIER")]
    pub specifier: String,

    /// File containing the import
    #[arg(long, value_name = "FILE")]
    pub from: PathBuf,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Arguments for the line command
#[derive(Args, Debug)]
pub struct LineArgs {
    /// Source file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 1-based line number holding the import
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub line: u32,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Arguments for the aliases command
#[derive(Args, Debug)]
pub struct AliasesArgs {
    /// Directory to inspect
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Workspace root bounding the config search (repeatable)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Vec<PathBuf>,

    /// Print a JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

impl Command {
    /// Workspace roots given on the command line.
    pub fn workspace_roots(&self) -> &[PathBuf] {
        match self {
            Command::Resolve(args) => &args.scope.workspace,
            Command::Line(args) => &args.scope.workspace,
            Command::Aliases(args) => &args.workspace,
        }
    }

    /// Whether `--strict` was given.
    pub fn strict(&self) -> bool {
        match self {
            Command::Resolve(args) => args.scope.strict,
            Command::Line(args) => args.scope.strict,
            Command::Aliases(_) => false,
        }
    }
}
