//! Terminal rendering of a `BrowserView`.

use anyhow::{Context, Result};
use browser::{
    BrowserView, EMPTY_RESULTS_MESSAGE, LOADING_MESSAGE, MovieCard, NOT_AVAILABLE, PageControls,
    ViewBody,
};
use colored::Colorize;

/// Print one frame, either as colored text or as JSON
pub fn print_view(view: &BrowserView, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(view).context("Failed to encode view")?;
        println!("{}", rendered);
        return Ok(());
    }

    print_header(view);
    match &view.body {
        ViewBody::ConfigurationError(message) => {
            println!("{} {}", "✗".red(), message.red().bold());
        }
        ViewBody::Loading => println!("{}", LOADING_MESSAGE.dimmed()),
        ViewBody::Error(message) => println!("{} {}", "✗".red(), message.red()),
        ViewBody::Empty => println!("{}", EMPTY_RESULTS_MESSAGE.yellow()),
        ViewBody::Grid(cards) => print_cards(cards),
    }
    if let Some(controls) = &view.controls {
        print_controls(controls);
    }
    Ok(())
}

fn print_header(view: &BrowserView) {
    let title = if view.search_term.trim().is_empty() {
        "Popular movies".to_string()
    } else {
        format!("Search results for '{}'", view.search_term)
    };
    println!(
        "\n{} {}",
        title.bold().blue(),
        format!("(sort: {})", view.sort_mode).dimmed()
    );
}

fn print_cards(cards: &[MovieCard]) {
    for (i, card) in cards.iter().enumerate() {
        let rating = if card.rating == NOT_AVAILABLE {
            card.rating.dimmed()
        } else {
            card.rating.yellow()
        };
        println!(
            "{:>3}. {} ({}) {} {}",
            (i + 1).to_string().green(),
            card.title.bold(),
            card.year,
            rating,
            card.poster.dimmed()
        );
    }
}

fn print_controls(controls: &PageControls) {
    let prev = if controls.prev_enabled { "[p] prev".normal() } else { "[p] prev".dimmed() };
    let next = if controls.next_enabled { "[n] next".normal() } else { "[n] next".dimmed() };
    println!(
        "\n{}  Page {} of {}  {}",
        prev, controls.page, controls.total_pages, next
    );
}
