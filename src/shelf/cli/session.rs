//! Line-driven browse session.
//!
//! Each input line is one action. Criteria actions re-render the summary and the visible
//! list right away, the terminal stand-in for controls that update the grid as they move.
//! A bad line is reported and the session keeps going.

use super::render::{render_catalog, render_categories, render_messages, render_product};
use shelf::api::{CatalogView, CmdMessage, CriteriaAction};
use shelf::config::ShelfConfig;
use shelf::criteria::{CategoryFilter, PriceBounds, SortKey};
use shelf::error::{Result, ShelfError};
use shelf::model::ProductId;
use std::io::{BufRead, Write};
use tracing::debug;

pub const SESSION_HELP: &str = "\
Commands:
  search [TEXT]      filter by name (no text clears the search)
  category C         all, electronics or fashion
  price MIN MAX      inclusive price range, 0-1000 in steps of 10
  sort K             featured, price-low, price-high or rating
  reset              restore every filter to its default
  show ID            show one product card
  categories         list categories with product counts
  list               show the current results again
  help               show this help
  quit               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Action(CriteriaAction),
    Show(ProductId),
    Categories,
    List,
    Help,
    Quit,
}

pub struct SessionOptions {
    pub use_color: bool,
    /// Print a prompt before each line (only useful on a terminal).
    pub prompt: bool,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "search" | "s" => SessionCommand::Action(CriteriaAction::Search(rest.to_string())),
        "category" | "cat" | "c" => {
            let filter: CategoryFilter = require(rest, "category C")?.parse()?;
            SessionCommand::Action(CriteriaAction::Category(filter))
        }
        "price" | "p" => {
            let mut parts = rest.split_whitespace();
            let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(usage("price MIN MAX"));
            };
            let bounds = PriceBounds::new(parse_number(min)?, parse_number(max)?)?;
            SessionCommand::Action(CriteriaAction::Price(bounds))
        }
        "sort" => {
            let key: SortKey = require(rest, "sort K")?.parse()?;
            SessionCommand::Action(CriteriaAction::Sort(key))
        }
        "reset" => SessionCommand::Action(CriteriaAction::Reset),
        "show" | "view" | "v" => {
            let id = require(rest, "show ID")?;
            let id = id
                .parse::<u32>()
                .map_err(|_| ShelfError::Session(format!("Invalid product id: {}", id)))?;
            SessionCommand::Show(ProductId(id))
        }
        "categories" => SessionCommand::Categories,
        "list" | "ls" => SessionCommand::List,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => return Err(ShelfError::Session(format!("Unknown command: {}", keyword))),
    };

    Ok(Some(command))
}

fn require<'a>(rest: &'a str, form: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(usage(form))
    } else {
        Ok(rest)
    }
}

fn usage(form: &str) -> ShelfError {
    ShelfError::Session(format!("Usage: {}", form))
}

fn parse_number(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| ShelfError::Session(format!("Invalid price: {}", raw)))
}

/// Runs the session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    view: &mut CatalogView,
    input: R,
    output: &mut W,
    config: &ShelfConfig,
    options: &SessionOptions,
) -> Result<()> {
    let use_color = options.use_color;

    let initial = view.visible();
    write!(
        output,
        "{}",
        render_catalog(&initial.listed_products, view.criteria(), config, use_color)
    )?;
    writeln!(output, "Type `help` for commands.")?;

    if options.prompt {
        write_prompt(output)?;
    }

    for line in input.lines() {
        let line = line?;

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "session command");
                execute(view, command, output, config, use_color)?;
            }
            Err(e) => {
                write!(
                    output,
                    "{}",
                    render_messages(&[CmdMessage::error(e.to_string())], use_color)
                )?;
            }
        }

        if options.prompt {
            write_prompt(output)?;
        }
    }

    output.flush()?;
    Ok(())
}

fn execute<W: Write>(
    view: &mut CatalogView,
    command: SessionCommand,
    output: &mut W,
    config: &ShelfConfig,
    use_color: bool,
) -> Result<()> {
    match command {
        SessionCommand::Action(action) => {
            let result = view.apply(action);
            write!(
                output,
                "{}",
                render_messages(&result.messages, use_color)
            )?;
            write!(
                output,
                "{}",
                render_catalog(&result.listed_products, view.criteria(), config, use_color)
            )?;
        }
        SessionCommand::List => {
            let result = view.visible();
            write!(
                output,
                "{}",
                render_catalog(&result.listed_products, view.criteria(), config, use_color)
            )?;
        }
        SessionCommand::Show(id) => match view.show(id) {
            Ok(result) => {
                for product in &result.listed_products {
                    write!(output, "{}", render_product(product, config, use_color))?;
                }
            }
            Err(e) => write!(
                output,
                "{}",
                render_messages(&[CmdMessage::error(e.to_string())], use_color)
            )?,
        },
        SessionCommand::Categories => {
            let result = view.categories();
            write!(
                output,
                "{}",
                render_categories(&result.category_counts, view.criteria().category, use_color)
            )?;
        }
        SessionCommand::Help => writeln!(output, "{}", SESSION_HELP)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn write_prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "shelf> ")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::criteria::Criteria;
    use shelf::model::Category;

    fn session(input: &str) -> (CatalogView, String) {
        let mut view = CatalogView::default();
        let mut out = Vec::new();
        run_session(
            &mut view,
            input.as_bytes(),
            &mut out,
            &ShelfConfig::default(),
            &SessionOptions {
                use_color: false,
                prompt: false,
            },
        )
        .unwrap();
        (view, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_search_keeps_inner_spaces() {
        assert_eq!(
            parse_line("search  smart watch ").unwrap(),
            Some(SessionCommand::Action(CriteriaAction::Search(
                "smart watch".into()
            )))
        );
        assert_eq!(
            parse_line("search").unwrap(),
            Some(SessionCommand::Action(CriteriaAction::Search(String::new())))
        );
    }

    #[test]
    fn parse_category_and_sort() {
        assert_eq!(
            parse_line("category Fashion").unwrap(),
            Some(SessionCommand::Action(CriteriaAction::Category(
                CategoryFilter::Only(Category::Fashion)
            )))
        );
        assert_eq!(
            parse_line("sort rating").unwrap(),
            Some(SessionCommand::Action(CriteriaAction::Sort(SortKey::Rating)))
        );
    }

    #[test]
    fn parse_price_requires_two_numbers() {
        assert_eq!(
            parse_line("price 0 150").unwrap(),
            Some(SessionCommand::Action(CriteriaAction::Price(
                PriceBounds::new(0, 150).unwrap()
            )))
        );
        assert!(parse_line("price 100").is_err());
        assert!(parse_line("price 1 2 3").is_err());
        assert!(parse_line("price low high").is_err());
        assert!(parse_line("price 500 100").is_err());
        assert!(parse_line("price 85 155").is_err());
    }

    #[test]
    fn parse_misc_commands() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("QUIT").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_line("exit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_line("?").unwrap(), Some(SessionCommand::Help));
        assert_eq!(
            parse_line("show 3").unwrap(),
            Some(SessionCommand::Show(ProductId(3)))
        );
        assert!(parse_line("show three").is_err());
        assert!(parse_line("show").is_err());
    }

    #[test]
    fn unknown_keyword_is_an_error() {
        let err = parse_line("fly away").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: fly");
    }

    #[test]
    fn session_renders_initial_catalog() {
        let (_, out) = session("");
        assert!(out.contains("Found 12 products"));
        assert!(out.contains("Type `help` for commands."));
    }

    #[test]
    fn session_applies_actions_in_order() {
        let (view, out) = session("search watch\nsort price-high\n");
        assert!(out.contains("Searching for \"watch\""));
        assert!(out.contains("Found 2 products"));
        assert!(out.contains("Sorted by Price: high to low"));
        assert_eq!(view.criteria().search, "watch");
        assert_eq!(view.criteria().sort, SortKey::PriceHigh);

        let prices: Vec<u32> = view
            .visible()
            .listed_products
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(prices, vec![599, 449]);
    }

    #[test]
    fn session_survives_bad_lines() {
        let (view, out) = session("category toys\nprice 900 1000\n");
        assert!(out.contains("Unknown category: toys"));
        assert!(out.contains("No products match the current filters."));
        assert!(out.contains("No products found"));
        assert_eq!(view.criteria().price, PriceBounds::new(900, 1000).unwrap());
    }

    #[test]
    fn session_reset_restores_defaults() {
        let (view, out) = session("search hat\ncategory fashion\nreset\n");
        assert!(out.contains("Filters reset"));
        assert_eq!(view.criteria(), &Criteria::default());
    }

    #[test]
    fn session_stops_at_quit() {
        let (view, _) = session("quit\nsearch watch\n");
        assert!(view.criteria().search.is_empty());
    }

    #[test]
    fn session_show_and_categories() {
        let (_, out) = session("show 3\nshow 99\ncategories\n");
        assert!(out.contains("Smart Watch Pro"));
        assert!(out.contains("Product not found: 99"));
        assert!(out.contains("● All"));
    }
}
