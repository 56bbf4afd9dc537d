use anyhow::Result;
use browser::{BrowserConfig, MovieBrowserController};
use query::SortMode;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = BrowserConfig::new(std::env::var("TMDB_API_KEY").ok());
    let mut controller = MovieBrowserController::from_config(&config)?;

    println!("Fetching popular movies...\n");
    let start = Instant::now();
    controller.start();
    controller.settle().await;
    println!("Settled in {:?}\n", start.elapsed());

    controller.set_sort_mode(SortMode::Rating);
    let view = controller.view();

    if let Some(message) = view.message() {
        println!("{}", message);
        return Ok(());
    }

    println!("=== Top rated on page 1 ===");
    for card in view.cards().iter().take(10) {
        println!("{:>4}  {:<40} {}", card.rating, card.title, card.year);
    }
    if let Some(controls) = view.controls {
        println!("\nPage {} of {}", controls.page, controls.total_pages);
    }

    Ok(())
}
