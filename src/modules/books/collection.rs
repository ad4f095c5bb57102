use rust_decimal::Decimal;
use shelf_catalog::{CatalogEntry, EntryFields, StockLine, ValidationError};

fn fields(
    title: &str,
    author: &str,
    genre: &str,
    page_count: i32,
    price: Decimal,
) -> EntryFields {
    EntryFields::new(title, author)
        .genre(genre)
        .page_count(page_count)
        .language("SK")
        .base_price(price)
}

/// Titles the library opens with, in shelving order.
pub fn collection() -> Result<Vec<StockLine>, ValidationError> {
    Ok(vec![
        StockLine::new(
            CatalogEntry::standard(fields(
                "Strach",
                "Jozef Karika",
                "mysteriozny",
                328,
                Decimal::new(1390, 2),
            ))?,
            5,
        ),
        StockLine::new(
            CatalogEntry::standard(fields(
                "Hlbina",
                "Jozef karika",
                "mysteriozny",
                464,
                Decimal::new(2067, 2),
            ))?,
            3,
        ),
        StockLine::new(
            CatalogEntry::standard(fields(
                "Holly",
                "Stephen King",
                "napinavy",
                504,
                Decimal::new(2176, 2),
            ))?,
            3,
        ),
        StockLine::new(
            CatalogEntry::collectible(
                fields("Oko za oko", "M.J. Arlidge", "napinavy", 560, Decimal::new(1891, 2)),
                true,
                false,
            )?,
            5,
        ),
        StockLine::new(
            CatalogEntry::collectible(
                fields("Program Joshua", "M.J. Arlidge", "napinavy", 336, Decimal::new(2117, 2)),
                true,
                true,
            )?,
            1,
        ),
        StockLine::new(
            CatalogEntry::collectible(
                fields("Výkupné", "John Grisham", "napinavy", 288, Decimal::new(1437, 2)),
                false,
                true,
            )?,
            1,
        ),
        StockLine::new(
            CatalogEntry::illustrated(
                fields(
                    "Encyklopédia zvierat",
                    "Genevieve Warnau",
                    "zvierata",
                    304,
                    Decimal::new(2190, 2),
                ),
                true,
            )?,
            3,
        ),
        StockLine::new(
            CatalogEntry::illustrated(
                fields(
                    "Encyklopédia bylín",
                    "Foni Book",
                    "priroda",
                    255,
                    Decimal::new(890, 2),
                ),
                false,
            )?,
            4,
        ),
    ])
}
