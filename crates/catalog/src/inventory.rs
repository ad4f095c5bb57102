use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::entry::CatalogEntry;
use crate::error::{InventoryError, LendingError, ReturnError};

/// One catalog entry together with the copies currently on the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    entry: CatalogEntry,
    copies_on_hand: u32,
}

impl InventoryRecord {
    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn copies_on_hand(&self) -> u32 {
        self.copies_on_hand
    }
}

/// Outcome of a successful borrow or return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Title as catalogued, regardless of how it was requested.
    pub title: String,
    pub copies_on_hand: u32,
}

/// Listing row produced by [`Inventory::list_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockView<'a> {
    pub entry: &'a CatalogEntry,
    pub copies_on_hand: u32,
    pub value: Decimal,
}

/// Copy counts for every catalogued title.
///
/// Titles are unique library-wide under case-insensitive comparison, so a
/// requested title resolves to at most one record. Records keep their
/// registration order for listing.
#[derive(Debug, Default)]
pub struct Inventory {
    records: Vec<InventoryRecord>,
    index: HashMap<String, usize>,
}

/// Normalizes a title for lookup.
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` copies of `entry`, inserting the entry if it is new.
    ///
    /// Returns the resulting copy count. A registration that would push the
    /// count past `u32::MAX` fails and leaves the record untouched.
    pub fn register(&mut self, entry: CatalogEntry, quantity: i32) -> Result<u32, InventoryError> {
        let added = u32::try_from(quantity)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(InventoryError::InvalidQuantity(quantity))?;

        let title = entry.title().to_string();
        let key = title_key(&title);
        let copies_on_hand = match self.index.get(&key) {
            Some(&position) => {
                let record = &mut self.records[position];
                if record.entry != entry {
                    return Err(InventoryError::TitleConflict { title });
                }
                let Some(total) = record.copies_on_hand.checked_add(added) else {
                    return Err(InventoryError::CopyLimitExceeded { title });
                };
                record.copies_on_hand = total;
                total
            }
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(InventoryRecord {
                    entry,
                    copies_on_hand: added,
                });
                added
            }
        };

        tracing::debug!(%title, added, copies_on_hand, "registered stock");
        Ok(copies_on_hand)
    }

    /// Lends one copy of the title.
    pub fn borrow(&mut self, title: &str) -> Result<Receipt, LendingError> {
        let record = self
            .find_mut(title)
            .ok_or_else(|| LendingError::not_found(title.trim()))?;

        if record.copies_on_hand == 0 {
            tracing::debug!(title = %record.entry.title(), "borrow refused, out of stock");
            return Err(LendingError::out_of_stock(record.entry.title()));
        }
        record.copies_on_hand -= 1;

        tracing::debug!(
            title = %record.entry.title(),
            copies_on_hand = record.copies_on_hand,
            "copy borrowed"
        );
        Ok(Receipt {
            title: record.entry.title().to_string(),
            copies_on_hand: record.copies_on_hand,
        })
    }

    /// Takes one copy of the title back.
    ///
    /// Returns are not capped by the number of copies lent out, only by the
    /// range of the copy count.
    pub fn return_copy(&mut self, title: &str) -> Result<Receipt, ReturnError> {
        let record = self.find_mut(title).ok_or_else(|| ReturnError::NotFound {
            title: title.trim().to_string(),
        })?;

        let Some(total) = record.copies_on_hand.checked_add(1) else {
            tracing::debug!(title = %record.entry.title(), "return refused, copy limit reached");
            return Err(ReturnError::CopyLimitExceeded {
                title: record.entry.title().to_string(),
            });
        };
        record.copies_on_hand = total;

        tracing::debug!(
            title = %record.entry.title(),
            copies_on_hand = record.copies_on_hand,
            "copy returned"
        );
        Ok(Receipt {
            title: record.entry.title().to_string(),
            copies_on_hand: record.copies_on_hand,
        })
    }

    /// Every record in registration order, with its computed value.
    pub fn list_all(&self) -> Vec<StockView<'_>> {
        self.records
            .iter()
            .map(|record| StockView {
                entry: &record.entry,
                copies_on_hand: record.copies_on_hand,
                value: record.entry.value(),
            })
            .collect()
    }

    pub fn find(&self, title: &str) -> Option<&InventoryRecord> {
        self.index
            .get(&title_key(title))
            .and_then(|&position| self.records.get(position))
    }

    pub fn copies_on_hand(&self, title: &str) -> Option<u32> {
        self.find(title).map(InventoryRecord::copies_on_hand)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find_mut(&mut self, title: &str) -> Option<&mut InventoryRecord> {
        let position = *self.index.get(&title_key(title))?;
        self.records.get_mut(position)
    }
}
