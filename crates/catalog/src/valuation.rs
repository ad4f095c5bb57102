//! Kind-specific valuation of catalog entries.

use rust_decimal::Decimal;

use crate::entry::{CatalogEntry, EntryKind};

/// Multiplier for illustrated encyclopedia-like works.
pub const ILLUSTRATED_MULTIPLIER: Decimal = Decimal::from_parts(25, 0, 0, false, 1);
/// Multiplier for a collectible that is both signed and rare.
pub const SIGNED_AND_RARE_MULTIPLIER: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
/// Multiplier for a collectible that is either signed or rare.
pub const SIGNED_OR_RARE_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Multiplier applied to the base price for the given kind.
pub fn multiplier(kind: EntryKind) -> Decimal {
    match kind {
        EntryKind::Standard => Decimal::ONE,
        EntryKind::Illustrated { has_illustrations } => {
            if has_illustrations {
                ILLUSTRATED_MULTIPLIER
            } else {
                Decimal::ONE
            }
        }
        EntryKind::Collectible { signed, rare } => match (signed, rare) {
            (true, true) => SIGNED_AND_RARE_MULTIPLIER,
            (true, false) | (false, true) => SIGNED_OR_RARE_MULTIPLIER,
            (false, false) => Decimal::ONE,
        },
    }
}

/// Displayed value of an entry: its base price scaled by the kind multiplier.
pub fn value(entry: &CatalogEntry) -> Decimal {
    entry.base_price() * multiplier(entry.kind())
}

impl CatalogEntry {
    pub fn value(&self) -> Decimal {
        value(self)
    }
}
