use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

mod authors;
mod bibtex;
mod commands;
mod config;
mod prepare;
mod sources;
mod ui;

use config::Config;
use ui::error_message;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to the user config, then built-in defaults)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare CroRIS input from a BibTeX list of papers
    #[command(after_help = "Example: croris-bib prepare -i list_of_papers.bib -o CroRIS_input.json")]
    Prepare {
        /// Input BibTeX file
        #[arg(short, long, value_name = "INPUT")]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,

        /// Keep local authors in author list order
        #[arg(long)]
        no_sort: bool,

        /// Write the complete author list instead of the collapsed one
        #[arg(long)]
        full_author_list: bool,

        /// Number of metadata requests in flight
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,
    },

    /// Build the author string for a list of names, one per line
    Authors {
        /// File with author names as "Surname, Given"
        #[arg(value_name = "NAMES")]
        names: PathBuf,

        /// Keep local authors in author list order
        #[arg(long)]
        no_sort: bool,

        /// Print the complete author list instead of the collapsed one
        #[arg(long)]
        full_author_list: bool,
    },

    /// List the configured local authors
    Roster,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the built-in configuration to the user config directory
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let (config, source) = Config::load(path)?;
    blog!("Config", "Using {}", source);
    Ok(config)
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Prepare {
            input,
            output,
            no_sort,
            full_author_list,
            concurrency,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::prepare::prepare(
                &config,
                commands::prepare::PrepareOptions {
                    input: &input,
                    output: &output,
                    no_sort,
                    full_author_list,
                    concurrency,
                },
            )
            .await
        }

        Commands::Authors {
            names,
            no_sort,
            full_author_list,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let mut options = config.author_options();
            options.sort &= !no_sort;
            options.full_list |= full_author_list;
            commands::authors::authors(&config, &names, options)
        }

        Commands::Roster => {
            let config = load_config(cli.config.as_deref())?;
            commands::roster::roster(&config);
            Ok(())
        }

        Commands::Config {
            action: ConfigAction::Init { force },
        } => commands::config::init(force),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = execute(cli).await {
        error_message(&format!("{:#}", err));
        process::exit(1);
    }
}
