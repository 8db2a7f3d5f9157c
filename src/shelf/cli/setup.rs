use clap::{Args, Parser, Subcommand};
use shelf::criteria::{CategoryFilter, Criteria, PriceBounds, SortKey, PRICE_CEILING, PRICE_FLOOR};
use shelf::error::Result;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Browse the product catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Cards per row (overrides the config file)
    #[arg(long, global = true, value_name = "N", help_heading = "Options")]
    pub columns: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching the filters
    #[command(alias = "ls", display_order = 1)]
    List(FilterArgs),

    /// Show a single product card
    #[command(alias = "v", display_order = 2)]
    Show {
        /// Product id (e.g. 3)
        id: u32,
    },

    /// List categories with product counts
    #[command(display_order = 3)]
    Categories,

    /// Browse interactively, one filter action per input line
    #[command(alias = "b", display_order = 4)]
    Browse,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Case-insensitive text to look for in product names
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category: all, electronics or fashion
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Lowest price, inclusive (0-1000, step 10)
    #[arg(long, default_value_t = PRICE_FLOOR as i64)]
    pub min: i64,

    /// Highest price, inclusive (0-1000, step 10)
    #[arg(long, default_value_t = PRICE_CEILING as i64)]
    pub max: i64,

    /// Sort: featured, price-low, price-high or rating
    #[arg(long, default_value = "featured")]
    pub sort: SortKey,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            min: PRICE_FLOOR as i64,
            max: PRICE_CEILING as i64,
            sort: SortKey::Featured,
        }
    }
}

impl FilterArgs {
    /// Search text is trimmed here, the same as a `search` line in `browse`.
    pub fn into_criteria(self) -> Result<Criteria> {
        Ok(Criteria {
            price: PriceBounds::new(self.min, self.max)?,
            search: self.search.trim().to_string(),
            category: self.category,
            sort: self.sort,
        })
    }
}
