//! Command-line interface for lorebook.
//!
//! Provides commands for building the lore-book data file and page,
//! re-rendering the page from an existing data file, and showing the
//! resolved configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::adapters::GitHubClient;
use crate::config::{load_config, ConfigOverrides, ResolvedConfig};
use crate::core::{render_from_file, Orchestrator};

/// lorebook - Export mod lore books to JSON and HTML
#[derive(Parser, Debug)]
#[command(name = "lorebook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug)]
pub struct GlobalOptions {
    /// Config file (default: nearest .lorebook/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Source repository as owner/name
    #[arg(long, global = true, env = "LOREBOOK_REPOSITORY")]
    pub repo: Option<String>,

    /// Branch or tag to read from
    #[arg(long, global = true, env = "LOREBOOK_BRANCH")]
    pub branch: Option<String>,

    /// Directory to write the data file and page into
    #[arg(short, long, global = true, env = "LOREBOOK_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all books and write the data file and HTML page
    Build {
        /// Bearer token for the GitHub API
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Re-render the HTML page from an existing data file
    Render {
        /// Data file to read (default: the configured output data file)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = load_config(&self.options.overrides())?;

        match self.command {
            Commands::Build { token } => build(&config, token).await,
            Commands::Render { data } => render(&config, data).await,
            Commands::Config => show_config(&config),
        }
    }
}

impl GlobalOptions {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            repository: self.repo.clone(),
            branch: self.branch.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Run the full export
async fn build(config: &ResolvedConfig, token: Option<String>) -> Result<()> {
    let client = GitHubClient::new(token)?;
    if client.is_authenticated() {
        info!("Using GitHub token");
    }

    let report = Orchestrator::new(&client, config).build().await?;

    eprintln!(
        "\n[{} books fetched, {} rendered]",
        report.books, report.rendered
    );
    eprintln!("  data: {}", report.written.data.display());
    eprintln!("  page: {}", report.written.html.display());

    Ok(())
}

/// Re-render from a data file
async fn render(config: &ResolvedConfig, data: Option<PathBuf>) -> Result<()> {
    let data_path = data.unwrap_or_else(|| config.output.data_path());
    let html_path = render_from_file(config, &data_path).await?;

    eprintln!("\n[Rendered {}]", html_path.display());
    Ok(())
}

/// Print the resolved configuration
fn show_config(config: &ResolvedConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;

    match config.config_file {
        Some(ref path) => println!("# Config file: {}", path.display()),
        None => println!("# Config file: (none, using defaults)"),
    }
    print!("{}", yaml);

    Ok(())
}
