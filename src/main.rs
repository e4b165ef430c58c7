use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use studio::commands;
use studio::runtime::RealRuntime;

/// studio - develop your packages in place
///
/// Tells the package manager to prefer local working copies of selected
/// dependencies during install/update, so changes to a library under active
/// development show up in the consuming project without a release.
///
/// Examples:
///   studio manage 'packages/*'   # Manage every package under packages/
///   studio list                  # Show managed paths and their packages
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to studio.json in the current directory)
    #[arg(
        long = "file",
        short = 'f',
        env = "STUDIO_FILE",
        value_name = "PATH",
        global = true
    )]
    pub file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Start managing a path pattern
    Manage(PatternArgs),

    /// Stop managing a path pattern
    Unmanage(PatternArgs),

    /// List managed path patterns and the packages they resolve to
    List,
}

#[derive(clap::Args, Debug)]
pub struct PatternArgs {
    /// Glob pattern naming local package directories
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    match cli.command {
        Commands::Manage(args) => commands::manage(runtime, &args.pattern, cli.file),
        Commands::Unmanage(args) => commands::unmanage(runtime, &args.pattern, cli.file),
        Commands::List => commands::list(runtime, cli.file),
    }
}
