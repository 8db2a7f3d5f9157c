//! # Filter Criteria
//!
//! The four independent controls that parameterize the visible list:
//!
//! | Control  | Type               | Default      |
//! |----------|--------------------|--------------|
//! | search   | `String`           | `""`         |
//! | category | [`CategoryFilter`] | `All`        |
//! | price    | [`PriceBounds`]    | `[0, 1000]`  |
//! | sort     | [`SortKey`]        | `Featured`   |
//!
//! Criteria are plain values. Changing one never touches the product data, and the
//! visible list is always recomputed from scratch (see `commands::visible`).
//!
//! Textual forms are parsed here so that every front-end shares one vocabulary:
//! `all|electronics|fashion` for categories and `featured|price-low|price-high|rating`
//! for sort keys.

use crate::error::{Result, ShelfError};
use crate::model::Category;
use std::fmt;
use std::str::FromStr;

pub const PRICE_FLOOR: u32 = 0;
pub const PRICE_CEILING: u32 = 1000;
pub const PRICE_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category filter.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The toggle row: `All` followed by every category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Inclusive price range, shaped like a dual-ended slider over
/// [`PRICE_FLOOR`, `PRICE_CEILING`] with [`PRICE_STEP`] increments.
///
/// Invariant: `PRICE_FLOOR <= min <= max <= PRICE_CEILING`, both on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    min: u32,
    max: u32,
}

impl PriceBounds {
    /// Validates raw handle positions.
    ///
    /// Only positions a slider can reach are accepted: both values on a step, inside the
    /// range, and not crossed. Anything else is rejected unchanged, so the bounds in force
    /// are always exactly the ones asked for.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if !on_slider(min) || !on_slider(max) || min > max {
            return Err(ShelfError::InvalidPriceBounds { min, max });
        }
        Ok(Self {
            min: min as u32,
            max: max as u32,
        })
    }

    pub fn full() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for PriceBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

fn on_slider(value: i64) -> bool {
    (PRICE_FLOOR as i64..=PRICE_CEILING as i64).contains(&value) && value % PRICE_STEP as i64 == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Authored order, no comparator.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }

    /// Human label used by the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: low to high",
            SortKey::PriceHigh => "Price: high to low",
            SortKey::Rating => "Top rated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShelfError::UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    pub search: String,
    pub category: CategoryFilter,
    pub price: PriceBounds,
    pub sort: SortKey,
}

impl Criteria {
    /// Restores every control to its default in a single assignment.
    pub fn reset(&mut self) {
        *self = Criteria::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Criteria::default()
    }
}
