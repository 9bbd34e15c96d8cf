//! sitetool command-line interface.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;

use sitetool::check::{self, Severity};
use sitetool::ctx::SiteContext;
use sitetool::site::config::SiteConfig;

#[derive(Parser)]
#[command(name = "sitetool")]
#[command(about = "A tool for static documentation site configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Documentation source directory
    #[arg(long)]
    source: Option<PathBuf>,

    /// Path to the site configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration and emit the renderer settings as JSON
    Emit {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the configuration and report problems
    Check,
    /// Write the JSON Schema for the configuration file
    Schema {
        /// Output path for the schema
        #[arg(short, long, default_value = ".site.schema.json")]
        output: PathBuf,
    },
    /// Write a stock configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut ctx = SiteContext::current(cli.source)?;

    match cli.command {
        Commands::Emit { output } => {
            ctx.prepare_site_config(cli.config)?;
            let settings = ctx.resolve_settings()?;
            let json = serde_json::to_string_pretty(&settings)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!(
                        "{}",
                        format!("Renderer settings written to {}", path.display())
                            .bold()
                            .purple()
                    );
                }
                None => println!("{json}"),
            }
        }
        Commands::Check => {
            let config = ctx.prepare_site_config(cli.config)?;
            let findings = check::run_checks(&ctx, &config);
            if findings.is_empty() {
                println!("{}", "Configuration OK".green().bold());
                return Ok(());
            }

            let mut failed = false;
            for finding in &findings {
                match finding.severity {
                    Severity::Warning => {
                        println!("{} {}", "warning:".yellow().bold(), finding.message)
                    }
                    Severity::Error => {
                        failed = true;
                        println!("{} {}", "error:".red().bold(), finding.message)
                    }
                }
            }
            if failed {
                bail!("configuration check failed");
            }
        }
        Commands::Schema { output } => {
            let schema = schemars::schema_for!(SiteConfig);
            let content = serde_json::to_string_pretty(&schema)?;
            fs::write(&output, content)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "{}",
                format!("Schema written to {}", output.display())
                    .bold()
                    .purple()
            );
        }
        Commands::Init { force } => {
            let path = cli
                .config
                .unwrap_or_else(|| ctx.source.join(".site.toml"));
            if path.exists() && !force {
                bail!(
                    "{} already exists, pass --force to overwrite",
                    path.display()
                );
            }
            let content = toml::to_string_pretty(&SiteConfig::default())?;
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{}",
                format!("Stock configuration written to {}", path.display())
                    .bold()
                    .purple()
            );
        }
    }

    Ok(())
}
