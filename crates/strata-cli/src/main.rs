// Rust guideline compliant 2026-10-19

//! Strata CLI Application
//!
//! Command-line interface for computing module release levels.

use clap::Parser;
use std::path::PathBuf;
use strata_cli::commands::{self, generate::GenerateArgs, levels::LevelsTarget};
use strata_cli::{create_formatter, logging, should_use_color};
use strata_core::config::CONFIG_FILE;
use strata_core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "strata",
    version,
    about = "Strata: release levels for modular library ecosystems",
    long_about = "Strata reads the module list and each module's build manifests, derives who depends on whom, prunes redundant relations and assigns every module the release level it can be published at.",
    after_help = "Examples:\n  strata init\n  strata generate\n  strata generate --dry-run --json\n  strata levels --in-place\n  strata show --level 2\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Generate the leveled module catalog from module manifests
    Generate {
        /// Module list document (overrides config)
        #[arg(long)]
        module_list: Option<PathBuf>,

        /// Catalog output path (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Directory holding the module checkouts (overrides config)
        #[arg(long)]
        manifest_dir: Option<PathBuf>,

        /// Compute levels without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Recompute levels of an existing catalog
    Levels {
        /// Catalog to read (defaults to the configured output)
        input: Option<PathBuf>,

        /// Write the recomputed catalog back to the input
        #[arg(long)]
        in_place: bool,

        /// Write the recomputed catalog to this path
        #[arg(long, conflicts_with = "in_place")]
        output: Option<PathBuf>,
    },

    /// Show a leveled catalog
    Show {
        /// Catalog to read (defaults to the configured output)
        input: Option<PathBuf>,

        /// Only show modules at this level
        #[arg(long)]
        level: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level, cli.log_json)?;

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format);
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    match cli.command {
        Some(Commands::Init { force }) => {
            commands::init::execute(&config_path, force, use_color)?;
        }
        Some(Commands::Generate {
            module_list,
            output,
            manifest_dir,
            dry_run,
        }) => {
            let config = Config::load(&config_path)?;
            let args = GenerateArgs {
                module_list,
                output,
                manifest_dir,
                dry_run,
            };
            let status = (format != "json").then_some(use_color);
            commands::generate::execute(config, args, formatter.as_ref(), status)?;
        }
        Some(Commands::Levels {
            input,
            in_place,
            output,
        }) => {
            let config = Config::load(&config_path)?;
            let target = match (in_place, output) {
                (true, _) => LevelsTarget::InPlace,
                (false, Some(path)) => LevelsTarget::Path(path),
                (false, None) => LevelsTarget::None,
            };
            commands::levels::execute(&config, input, target, formatter.as_ref())?;
        }
        Some(Commands::Show { input, level }) => {
            let config = Config::load(&config_path)?;
            commands::show::execute(&config, input, level, formatter.as_ref())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
