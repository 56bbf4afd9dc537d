mod commands;
mod display;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use browser::{BrowserConfig, MovieBrowserController, ViewBody};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use commands::{BrowseCommand, HELP};
use query::{DEFAULT_LANGUAGE, SortMode};
use tmdb_client::{DEFAULT_API_BASE_URL, TmdbClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Debounce used by the interactive session when none is given
const BROWSE_DEBOUNCE_MS: u64 = 300;

/// Movie Browser - search and page through TMDB from the terminal
#[derive(Parser)]
#[command(name = "movie-browser")]
#[command(about = "Browse popular movies or search TMDB by title", long_about = None)]
struct Cli {
    /// TMDB v3 API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the movie API
    #[arg(long, env = "TMDB_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Base URL prepended to poster paths
    #[arg(long, env = "TMDB_IMAGE_BASE_URL", default_value = catalog::DEFAULT_IMAGE_BASE_URL)]
    image_base_url: String,

    /// Locale sent with every request
    #[arg(long, env = "TMDB_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Delay before a request is sent, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Print views as JSON instead of colored text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: type commands to search, sort and page
    Browse,

    /// Show one page of popular movies
    Discover(PageArgs),

    /// Search movies by title
    Search {
        /// Title to search for
        term: String,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Page to show (clamped to the pages available)
    #[arg(long, default_value = "1")]
    page: u32,

    /// Client-side ordering: none, date or rating
    #[arg(long, default_value = "none")]
    sort: SortMode,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never interleave with rendered views
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let default_debounce = match cli.command {
        Commands::Browse => BROWSE_DEBOUNCE_MS,
        _ => 0,
    };
    let config = BrowserConfig::new(cli.api_key.clone())
        .with_api_base_url(cli.api_base_url.clone())
        .with_image_base_url(cli.image_base_url.clone())
        .with_language(cli.language.clone())
        .with_debounce(Duration::from_millis(cli.debounce_ms.unwrap_or(default_debounce)));
    info!(?config, "starting movie browser");

    let mut controller =
        MovieBrowserController::from_config(&config).context("Invalid --api-base-url")?;

    let ok = match cli.command {
        Commands::Browse => handle_browse(&mut controller, cli.json).await?,
        Commands::Discover(args) => handle_one_shot(&mut controller, None, &args, cli.json).await?,
        Commands::Search { term, page } => {
            handle_one_shot(&mut controller, Some(term), &page, cli.json).await?
        }
    };

    controller.shutdown();
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Handle the 'discover' and 'search' commands.
///
/// Returns `false` when the final view is an error.
async fn handle_one_shot(
    controller: &mut MovieBrowserController<TmdbClient>,
    term: Option<String>,
    args: &PageArgs,
    json: bool,
) -> Result<bool> {
    match term {
        Some(term) => controller.search(term),
        None => controller.start(),
    }
    controller.settle().await;

    // Page 1 tells us how many pages exist; only then can we jump
    if args.page > 1 && controller.go_to_page(args.page) {
        controller.settle().await;
    }
    controller.set_sort_mode(args.sort);

    let view = controller.view();
    display::print_view(&view, json)?;
    Ok(!matches!(
        view.body,
        ViewBody::ConfigurationError(_) | ViewBody::Error(_)
    ))
}

/// Handle the 'browse' command.
///
/// Reads commands from stdin while applying fetch results as they arrive.
async fn handle_browse(
    controller: &mut MovieBrowserController<TmdbClient>,
    json: bool,
) -> Result<bool> {
    if !controller.is_configured() {
        display::print_view(&controller.view(), json)?;
        return Ok(false);
    }

    if !json {
        println!("{}", HELP.dimmed());
    }
    controller.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            applied = controller.next_outcome(), if controller.is_in_flight() => {
                if applied {
                    display::print_view(&controller.view(), json)?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match line.parse::<BrowseCommand>() {
                    Ok(BrowseCommand::Quit) => break,
                    Ok(command) => apply_command(controller, command, json)?,
                    Err(message) => eprintln!("{}", message.yellow()),
                }
            }
        }
    }

    Ok(true)
}

fn apply_command(
    controller: &mut MovieBrowserController<TmdbClient>,
    command: BrowseCommand,
    json: bool,
) -> Result<()> {
    match command {
        BrowseCommand::Search(term) => {
            controller.set_search_term(term);
        }
        BrowseCommand::Clear => {
            controller.set_search_term("");
        }
        BrowseCommand::Next => {
            if !controller.go_next() {
                eprintln!("{}", "Already on the last page".yellow());
            }
        }
        BrowseCommand::Prev => {
            if !controller.go_prev() {
                eprintln!("{}", "Already on the first page".yellow());
            }
        }
        BrowseCommand::Page(page) => {
            controller.go_to_page(page);
        }
        BrowseCommand::Sort(mode) => {
            // Re-sorting is local, so redraw right away
            controller.set_sort_mode(mode);
            display::print_view(&controller.view(), json)?;
        }
        BrowseCommand::Redraw => display::print_view(&controller.view(), json)?,
        BrowseCommand::Help => println!("{}", HELP),
        BrowseCommand::Quit => {}
    }
    Ok(())
}
