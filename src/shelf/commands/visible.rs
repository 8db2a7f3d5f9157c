//! The filter-then-sort pipeline behind every product listing.
//!
//! [`compute`] is a pure function of the product slice and the criteria: it borrows both,
//! allocates a fresh result vector and never reorders or mutates its input. Calling it
//! twice with the same arguments yields the same sequence.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::criteria::{Criteria, SortKey};
use crate::model::Product;
use tracing::debug;

pub const EMPTY_MESSAGE: &str = "No products match the current filters.";

pub fn compute<'a>(products: &'a [Product], criteria: &Criteria) -> Vec<&'a Product> {
    let needle = criteria.search.to_lowercase();

    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| criteria.category.matches(p.category))
        .filter(|p| criteria.price.contains(p.price))
        .collect();

    // sort_by is stable: equal keys keep authored order.
    match criteria.sort {
        SortKey::Featured => {}
        SortKey::PriceLow => visible.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => visible.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    visible
}

pub fn run(catalog: &Catalog, criteria: &Criteria) -> CmdResult {
    let visible: Vec<Product> = compute(catalog.products(), criteria)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        search = %criteria.search,
        category = %criteria.category,
        price = %criteria.price,
        sort = %criteria.sort,
        visible = visible.len(),
        total = catalog.len(),
        "recomputed visible list"
    );

    let mut result = CmdResult::default();
    if visible.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_MESSAGE));
    }
    result
        .with_listed_products(visible)
        .with_criteria(criteria.clone())
}
