//! Named styles for the shelf CLI.
//!
//! Templates only use semantic names (what a piece of text *is*: a price, a category tag,
//! a disabled action). The mapping to colors lives here and nowhere else.

use super::theme::{rgb_to_ansi256, Theme};
use console::Style;
use once_cell::sync::Lazy;

pub mod names {
    pub const PLAIN: &str = "plain";
    pub const HEADING: &str = "heading";
    pub const MUTED: &str = "muted";
    pub const COUNT: &str = "count";
    pub const BORDER: &str = "border";
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const RATING: &str = "rating";
    pub const PRICE: &str = "price";
    pub const AVAILABLE: &str = "available";
    pub const UNAVAILABLE: &str = "unavailable";
    pub const ACTION: &str = "action";
    pub const ACTION_DISABLED: &str = "action_disabled";
    pub const SELECTED: &str = "selected";
    pub const EMPTY_TITLE: &str = "empty_title";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((138, 138, 138)));

    Theme::new()
        .add(names::PLAIN, Style::new())
        .add(names::HEADING, Style::new().bold())
        .add(names::MUTED, muted.clone())
        .add(names::COUNT, Style::new().bold().cyan())
        .add(
            names::BORDER,
            Style::new().color256(rgb_to_ansi256((88, 88, 110))),
        )
        .add(names::NAME, Style::new().bold())
        .add(names::CATEGORY, Style::new().magenta())
        .add(names::RATING, Style::new().yellow())
        .add(names::PRICE, Style::new().bold().green())
        .add(names::AVAILABLE, Style::new().green())
        .add(names::UNAVAILABLE, Style::new().red())
        .add(names::ACTION, Style::new().bold().cyan())
        .add(names::ACTION_DISABLED, muted.clone().strikethrough())
        .add(names::SELECTED, Style::new().bold().cyan().underlined())
        .add(names::EMPTY_TITLE, Style::new().bold())
        .add(names::INFO, muted.italic())
        .add(names::SUCCESS, Style::new().green())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_is_registered() {
        let all = [
            names::PLAIN,
            names::HEADING,
            names::MUTED,
            names::COUNT,
            names::BORDER,
            names::NAME,
            names::CATEGORY,
            names::RATING,
            names::PRICE,
            names::AVAILABLE,
            names::UNAVAILABLE,
            names::ACTION,
            names::ACTION_DISABLED,
            names::SELECTED,
            names::EMPTY_TITLE,
            names::INFO,
            names::SUCCESS,
            names::ERROR,
        ];
        for name in all {
            let styled = SHELF_THEME.apply(name, "x", false);
            assert_eq!(styled, "x", "missing style {}", name);
        }
    }
}
