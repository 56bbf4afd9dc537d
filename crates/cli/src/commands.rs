//! Line commands accepted by the interactive `browse` session.

use std::str::FromStr;

use query::SortMode;

pub const HELP: &str = "\
Commands:
  /search <text>   search by title (page resets to 1)
  /clear           back to popular movies
  n, next          next page
  p, prev          previous page
  page <N>         jump to page N
  sort <mode>      none | date | rating
  r, refresh       redraw the current page
  h, help          show this help
  q, quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Clear,
    Next,
    Prev,
    Page(u32),
    Sort(SortMode),
    Redraw,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "/search" | "/s" => Ok(BrowseCommand::Search(rest.to_string())),
            "/clear" => Ok(BrowseCommand::Clear),
            "n" | "next" => Ok(BrowseCommand::Next),
            "p" | "prev" => Ok(BrowseCommand::Prev),
            "page" => rest
                .parse()
                .map(BrowseCommand::Page)
                .map_err(|_| format!("Not a page number: {:?}", rest)),
            "sort" => rest
                .parse()
                .map(BrowseCommand::Sort)
                .map_err(|e: query::QueryError| e.to_string()),
            "" | "r" | "refresh" => Ok(BrowseCommand::Redraw),
            "h" | "help" | "?" => Ok(BrowseCommand::Help),
            "q" | "quit" | "exit" => Ok(BrowseCommand::Quit),
            other => Err(format!("Unknown command {:?} (type 'help')", other)),
        }
    }
}
