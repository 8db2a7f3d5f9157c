use crate::catalog::Catalog;
use crate::commands::{visible, CmdMessage, CmdResult};
use crate::criteria::{CategoryFilter, Criteria, PriceBounds, SortKey};
use tracing::debug;

/// One discrete user action on the criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaAction {
    Search(String),
    Category(CategoryFilter),
    Price(PriceBounds),
    Sort(SortKey),
    Reset,
}

/// Applies `action` to `criteria`, then recomputes the visible list from the updated value.
pub fn run(catalog: &Catalog, criteria: &mut Criteria, action: CriteriaAction) -> CmdResult {
    debug!(?action, "applying criteria action");

    let note = match action {
        CriteriaAction::Search(text) => {
            let note = if text.is_empty() {
                "Search cleared".to_string()
            } else {
                format!("Searching for \"{}\"", text)
            };
            criteria.search = text;
            note
        }
        CriteriaAction::Category(filter) => {
            criteria.category = filter;
            format!("Category: {}", filter)
        }
        CriteriaAction::Price(bounds) => {
            criteria.price = bounds;
            format!("Price: {}", bounds)
        }
        CriteriaAction::Sort(key) => {
            criteria.sort = key;
            format!("Sorted by {}", key.label())
        }
        CriteriaAction::Reset => {
            criteria.reset();
            "Filters reset".to_string()
        }
    };

    let mut result = visible::run(catalog, criteria);
    result.messages.insert(0, CmdMessage::success(note));
    result
}
