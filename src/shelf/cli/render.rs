//! # Rendering Module
//!
//! Turns command results into terminal text through the templates in `templates.rs`.
//!
//! Layout calculations (card widths, truncation, padding, grid rows) stay in Rust because
//! they need Unicode-aware width handling. Each output line reaches the template as a list
//! of segments, every segment carrying its text and a semantic style name. Templates then
//! only decide presentation.

use super::styles::{names, SHELF_THEME};
use super::templates::{CARD_TEMPLATE, CATALOG_TEMPLATE, CATEGORIES_TEMPLATE, MESSAGES_TEMPLATE};
use super::theme::render_with_color;
use serde::Serialize;
use shelf::api::{CategoryCount, CmdMessage, MessageLevel};
use shelf::config::ShelfConfig;
use shelf::criteria::{CategoryFilter, Criteria};
use shelf::model::Product;
use unicode_width::UnicodeWidthStr;

/// Inner width of a product card, borders excluded.
pub const CARD_WIDTH: usize = 30;
const CARD_HEIGHT: usize = 6;
const CARD_GAP: &str = "  ";
const DEPICTION_WIDTH: usize = 2;

pub const BUY_LABEL: &str = "[ Buy ]";
pub const SOLD_OUT_LABEL: &str = "[ Sold out ]";
pub const EMPTY_TITLE: &str = "No products found";
pub const EMPTY_HINT: &str = "Try changing the search parameters";

#[derive(Serialize, Clone)]
struct Segment {
    text: String,
    style: &'static str,
}

impl Segment {
    fn new(text: impl Into<String>, style: &'static str) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

type Line = Vec<Segment>;

#[derive(Serialize)]
struct CatalogData {
    summary: String,
    count: usize,
    noun: &'static str,
    empty: bool,
    empty_title: &'static str,
    empty_hint: &'static str,
    lines: Vec<Line>,
}

#[derive(Serialize)]
struct CardData {
    lines: Vec<Line>,
}

#[derive(Serialize)]
struct CategoryOption {
    marker: &'static str,
    label: String,
    padding: String,
    count: usize,
    style: &'static str,
}

#[derive(Serialize)]
struct CategoriesData {
    options: Vec<CategoryOption>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders the criteria summary, the match count and the product grid (or the empty state).
pub fn render_catalog(
    products: &[Product],
    criteria: &Criteria,
    config: &ShelfConfig,
    use_color: bool,
) -> String {
    let data = CatalogData {
        summary: summarize(criteria, &config.currency),
        count: products.len(),
        noun: if products.len() == 1 {
            "product"
        } else {
            "products"
        },
        empty: products.is_empty(),
        empty_title: EMPTY_TITLE,
        empty_hint: EMPTY_HINT,
        lines: grid_lines(products, config),
    };

    render_with_color(CATALOG_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders a single product card.
pub fn render_product(product: &Product, config: &ShelfConfig, use_color: bool) -> String {
    let data = CardData {
        lines: card_lines(product, config),
    };

    render_with_color(CARD_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the category toggle row, one option per line, marking the active one.
pub fn render_categories(
    counts: &[CategoryCount],
    active: CategoryFilter,
    use_color: bool,
) -> String {
    let label_width = counts
        .iter()
        .map(|c| c.filter.to_string().width())
        .max()
        .unwrap_or(0);

    let options = counts
        .iter()
        .map(|c| {
            let label = c.filter.to_string();
            let selected = c.filter == active;
            CategoryOption {
                marker: if selected { "●" } else { "○" },
                padding: " ".repeat(label_width - label.width() + 2),
                label,
                count: c.count,
                style: if selected {
                    names::SELECTED
                } else {
                    names::PLAIN
                },
            }
        })
        .collect();

    render_with_color(
        CATEGORIES_TEMPLATE,
        &CategoriesData { options },
        &SHELF_THEME,
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &SHELF_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// One-line description of the criteria in force.
pub fn summarize(criteria: &Criteria, currency: &str) -> String {
    let search = if criteria.search.is_empty() {
        "any name".to_string()
    } else {
        format!("\"{}\"", criteria.search)
    };

    format!(
        "search {} · category {} · price {c}{} - {c}{} · sort {}",
        search,
        criteria.category,
        criteria.price.min(),
        criteria.price.max(),
        criteria.sort.label(),
        c = currency,
    )
}

fn grid_lines(products: &[Product], config: &ShelfConfig) -> Vec<Line> {
    let columns = config.columns.max(1);
    let mut lines = Vec::new();

    for (row_index, row) in products.chunks(columns).enumerate() {
        if row_index > 0 {
            lines.push(Vec::new());
        }

        let cards: Vec<Vec<Line>> = row.iter().map(|p| card_lines(p, config)).collect();
        for i in 0..CARD_HEIGHT {
            let mut line = Vec::new();
            for (j, card) in cards.iter().enumerate() {
                if j > 0 {
                    line.push(Segment::new(CARD_GAP, names::PLAIN));
                }
                line.extend(card[i].iter().cloned());
            }
            lines.push(line);
        }
    }

    lines
}

fn card_lines(product: &Product, config: &ShelfConfig) -> Vec<Line> {
    let rule = "─".repeat(CARD_WIDTH + 2);
    let depiction = pad_to_width(&product.depiction, DEPICTION_WIDTH);
    let name = truncate_to_width(&product.name, CARD_WIDTH - DEPICTION_WIDTH - 1);

    let (availability, availability_style) = if product.in_stock {
        ("In stock", names::AVAILABLE)
    } else {
        ("Out of stock", names::UNAVAILABLE)
    };

    let price = format!("{}{}", config.currency, product.price);
    let mut price_line = vec![Segment::new(price.clone(), names::PRICE)];
    if config.show_purchase {
        let (label, style) = if product.in_stock {
            (BUY_LABEL, names::ACTION)
        } else {
            (SOLD_OUT_LABEL, names::ACTION_DISABLED)
        };
        let gap = CARD_WIDTH.saturating_sub(price.width() + label.width());
        price_line.push(Segment::new(" ".repeat(gap), names::PLAIN));
        price_line.push(Segment::new(label, style));
    }

    vec![
        vec![Segment::new(format!("╭{}╮", rule), names::BORDER)],
        boxed(vec![
            Segment::new(depiction, names::PLAIN),
            Segment::new(" ", names::PLAIN),
            Segment::new(name, names::NAME),
        ]),
        boxed(vec![
            Segment::new(format!("[{}]", product.category), names::CATEGORY),
            Segment::new("  ", names::PLAIN),
            Segment::new(format!("★ {:.1}", product.rating), names::RATING),
        ]),
        boxed(vec![Segment::new(availability, availability_style)]),
        boxed(price_line),
        vec![Segment::new(format!("╰{}╯", rule), names::BORDER)],
    ]
}

/// Wraps card content in side borders, padding it to the card width.
fn boxed(content: Line) -> Line {
    let width: usize = content.iter().map(|s| s.text.width()).sum();
    let mut line = Vec::with_capacity(content.len() + 3);
    line.push(Segment::new("│ ", names::BORDER));
    line.extend(content);
    line.push(Segment::new(
        " ".repeat(CARD_WIDTH.saturating_sub(width)),
        names::PLAIN,
    ));
    line.push(Segment::new(" │", names::BORDER));
    line
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}
