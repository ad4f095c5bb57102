//! Lending library domain model.
//!
//! Catalog entries are immutable records whose displayed value depends on
//! their kind; the [`Inventory`] tracks how many copies of each entry are on
//! the shelf and serves borrow and return requests by title.

pub mod entry;
pub mod error;
pub mod inventory;
pub mod valuation;

pub use entry::{CatalogEntry, EntryFields, EntryKind};
pub use error::{InventoryError, LendingError, ReturnError, ValidationError};
pub use inventory::{Inventory, InventoryRecord, Receipt, StockView};

/// Catalog entry paired with the number of copies to put on the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub entry: CatalogEntry,
    pub quantity: i32,
}

impl StockLine {
    pub fn new(entry: CatalogEntry, quantity: i32) -> Self {
        Self { entry, quantity }
    }
}
