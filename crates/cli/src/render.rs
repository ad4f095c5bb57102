//! Console rendering of the inventory listing.

use std::io::{self, Write};

use shelf_catalog::{EntryKind, StockView};

/// Variant flags shown after a listing line.
pub fn kind_flags(kind: EntryKind) -> String {
    match kind {
        EntryKind::Standard => String::new(),
        EntryKind::Illustrated { has_illustrations } => {
            format!(" (Illustrated: {has_illustrations})")
        }
        EntryKind::Collectible { signed, rare } => format!(" (Signed: {signed}, Rare: {rare})"),
    }
}

pub fn listing_line(view: &StockView<'_>) -> String {
    format!(
        "{} by {} - Quantity: {} - Value: {:.2}{}",
        view.entry.title(),
        view.entry.author(),
        view.copies_on_hand,
        view.value,
        kind_flags(view.entry.kind())
    )
}

pub fn write_listing<W: Write>(output: &mut W, rows: &[StockView<'_>]) -> io::Result<()> {
    writeln!(output, "\nHere is the list of all books in our library")?;
    if rows.is_empty() {
        writeln!(output, "There are no books in the library.")?;
        return Ok(());
    }

    writeln!(output, "Books in Library:")?;
    for view in rows {
        writeln!(output, "{}", listing_line(view))?;
    }
    Ok(())
}
