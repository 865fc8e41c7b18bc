mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{basics::BasicsArgs, config::ConfigSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assess",
    about = "Organizational self-assessment wizard: fill in the phases, save and resume profiles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root (default: auto-detect from .assess/ or .git/)
    #[arg(long, global = true, env = "ASSESS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .assess/ with a default config and an empty working profile
    Init,

    /// Start a new profile, discarding unsaved work
    New {
        /// Confirm that the working profile may be discarded
        #[arg(long)]
        yes: bool,
    },

    /// Fill in and save "The Basics"
    Basics(BasicsArgs),

    /// Show the basics form with the working profile's values
    Show,

    /// Show which steps are unlocked and how far along the profile is
    Progress,

    /// Save the working profile to <organization name>.json
    Save {
        /// Directory to write into (default: the workspace root)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Load a saved profile file, replacing the working profile
    Load { file: PathBuf },

    /// Inspect the workspace configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::New { yes } => cmd::new::run(&root, yes, cli.json),
        Commands::Basics(args) => cmd::basics::run(&root, args, cli.json),
        Commands::Show => cmd::show::run(&root, cli.json),
        Commands::Progress => cmd::progress::run(&root, cli.json),
        Commands::Save { out } => cmd::save::run(&root, out.as_deref(), cli.json),
        Commands::Load { file } => cmd::load::run(&root, &file, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
