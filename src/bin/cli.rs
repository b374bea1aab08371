//! Article browser CLI
//!
//! `list` mirrors the article list page, `show <id>` the detail page and
//! `merge` prepares the documents both of them read.

use std::path::PathBuf;
use std::process::ExitCode;

use article_browser::{
    error::Result,
    models::{CategoryCode, Config},
    pipeline, render,
};
use clap::{Parser, Subcommand};

/// articles - static article browser
#[derive(Parser, Debug)]
#[command(
    name = "articles",
    version,
    about = "Browse articles published as static JSON documents"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "articles.toml")]
    config: PathBuf,

    /// Read documents from this URL instead of the configured source
    #[arg(long, global = true, conflicts_with = "root")]
    base_url: Option<String>,

    /// Read documents from this directory instead of the configured source
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List articles, newest first
    List {
        /// Only scan this category (four digits, e.g. 0026)
        #[arg(long)]
        category: Option<CategoryCode>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one article with its comments
    Show {
        /// Article id: `0026_001` or legacy `article_001`
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration
    Validate,

    /// Merge scraped article bodies with their comments into servable documents
    Merge {
        /// Only merge this category (default: every configured category)
        #[arg(long)]
        category: Option<CategoryCode>,

        /// Directory holding `<cat>/<cat>_<seq>.json` bodies
        #[arg(long)]
        articles_dir: Option<PathBuf>,

        /// Directory holding `<cat>/<cat>_<seq>.json` comment lists
        #[arg(long)]
        comments_dir: Option<PathBuf>,

        /// Root to write `articles/<cat>/article_<seq>.json` under
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load_or_default(&cli.config);

    if let Some(base_url) = &cli.base_url {
        config.source.base_url = Some(base_url.clone());
        config.source.root_dir = None;
    }
    if let Some(root) = &cli.root {
        config.source.base_url = None;
        config.source.root_dir = Some(root.clone());
    }
    config
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli);

    match cli.command {
        Command::List { category, json } => {
            config.validate()?;
            let output = pipeline::run_list(&config, category.as_ref(), json).await?;
            println!("{output}");
        }

        Command::Show { id, json } => {
            config.validate()?;
            match pipeline::run_show(&config, &id, json).await {
                Ok(output) => println!("{output}"),
                Err(e) if e.is_not_found() => {
                    println!("{}", render::not_found(&id));
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        Command::Validate => pipeline::run_validate(&config)?,

        Command::Merge {
            category,
            articles_dir,
            comments_dir,
            output,
        } => {
            let mut config = config;
            if let Some(dir) = articles_dir {
                config.merge.articles_dir = dir;
            }
            if let Some(dir) = comments_dir {
                config.merge.comments_dir = dir;
            }
            if let Some(dir) = output {
                config.merge.output_dir = dir;
            }

            let reports = pipeline::run_merge(&config, category.as_ref()).await?;
            for report in &reports {
                println!("{report}");
            }
            let failures: usize = reports.iter().map(|r| r.failures).sum();
            if failures > 0 {
                log::warn!("{} articles could not be merged", failures);
            }
        }
    }

    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            if e.is_not_found() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
