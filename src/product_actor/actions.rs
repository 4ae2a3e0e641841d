//! Custom actions for the catalog's [`Product`](crate::model::Product) entities.

/// Catalog operations beyond CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the stock flag without changing it.
    CheckStock,
    /// Marks the product in or out of stock. Carts already holding it keep it.
    SetStock(bool),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    CheckStock(bool),
    /// Carries the previous flag.
    SetStock(bool),
}
