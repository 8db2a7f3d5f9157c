use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::model::ProductId;

/// Looks a single product up by id. Criteria do not apply here.
pub fn run(catalog: &Catalog, id: ProductId) -> Result<CmdResult> {
    let product = catalog
        .find(id)
        .cloned()
        .ok_or(ShelfError::ProductNotFound(id.0))?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}
