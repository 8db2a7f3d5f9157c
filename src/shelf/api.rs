//! # Catalog View Model
//!
//! [`CatalogView`] is the single entry point for front-ends. It owns the product
//! collection and the current [`Criteria`], and it is a **thin facade** over the
//! command layer:
//!
//! - Every state change goes through [`CatalogView::apply`], which updates the criteria
//!   and then explicitly recomputes the visible list before returning.
//! - Nothing is recomputed implicitly; there are no observers or callbacks. A front-end
//!   that wants the list asks for it, and gets a [`CmdResult`] back.
//! - No I/O happens here. Rendering is the caller's job.
//!
//! Tests at this level check dispatch and state ownership. The pipeline itself is
//! covered in `commands::visible`.

use crate::catalog::Catalog;
use crate::commands;
use crate::criteria::{CategoryFilter, Criteria, PriceBounds, SortKey};
use crate::error::Result;
use crate::model::ProductId;

pub struct CatalogView {
    catalog: Catalog,
    criteria: Criteria,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: Criteria::default(),
        }
    }

    /// Starts from explicit criteria instead of the defaults (one-shot listings).
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// The visible list for the current criteria.
    pub fn visible(&self) -> commands::CmdResult {
        commands::visible::run(&self.catalog, &self.criteria)
    }

    pub fn apply(&mut self, action: CriteriaAction) -> commands::CmdResult {
        commands::adjust::run(&self.catalog, &mut self.criteria, action)
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> commands::CmdResult {
        self.apply(CriteriaAction::Search(text.into()))
    }

    pub fn select_category(&mut self, filter: CategoryFilter) -> commands::CmdResult {
        self.apply(CriteriaAction::Category(filter))
    }

    pub fn set_price(&mut self, bounds: PriceBounds) -> commands::CmdResult {
        self.apply(CriteriaAction::Price(bounds))
    }

    pub fn set_sort(&mut self, key: SortKey) -> commands::CmdResult {
        self.apply(CriteriaAction::Sort(key))
    }

    pub fn reset(&mut self) -> commands::CmdResult {
        self.apply(CriteriaAction::Reset)
    }

    pub fn show(&self, id: ProductId) -> Result<commands::CmdResult> {
        commands::show::run(&self.catalog, id)
    }

    pub fn categories(&self) -> commands::CmdResult {
        commands::categories::run(&self.catalog)
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

pub use crate::commands::adjust::CriteriaAction;
pub use crate::commands::{CategoryCount, CmdMessage, CmdResult, MessageLevel};
