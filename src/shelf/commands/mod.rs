use crate::criteria::{CategoryFilter, Criteria};
use crate::model::Product;

pub mod adjust;
pub mod categories;
pub mod show;
pub mod visible;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A category option together with how many catalog products fall under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub filter: CategoryFilter,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<Product>,
    /// Criteria in force when `listed_products` was computed.
    pub criteria: Option<Criteria>,
    pub category_counts: Vec<CategoryCount>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = Some(criteria);
        self
    }

    pub fn with_category_counts(mut self, counts: Vec<CategoryCount>) -> Self {
        self.category_counts = counts;
        self
    }
}
