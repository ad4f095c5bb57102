use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::valuation;

/// Bibliographic fields shared by every kind of catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub page_count: i32,
    pub language: Option<String>,
    pub base_price: Decimal,
}

impl EntryFields {
    /// Starts a field set with the two mandatory attributes.
    ///
    /// Page count and price still have to be supplied before the fields will
    /// pass validation.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: None,
            page_count: 0,
            language: None,
            base_price: Decimal::ZERO,
        }
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn page_count(mut self, page_count: i32) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn base_price(mut self, base_price: Decimal) -> Self {
        self.base_price = base_price;
        self
    }
}

/// Closed set of catalog entry kinds, each carrying its valuation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    Standard,
    /// Encyclopedia-like works.
    Illustrated { has_illustrations: bool },
    /// Special editions.
    Collectible { signed: bool, rare: bool },
}

/// Immutable record for one distinct title/edition held by the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    title: String,
    author: String,
    genre: Option<String>,
    page_count: u32,
    language: Option<String>,
    base_price: Decimal,
    kind: EntryKind,
}

impl CatalogEntry {
    /// Validates `fields` and builds an entry of the given kind.
    pub fn new(fields: EntryFields, kind: EntryKind) -> Result<Self, ValidationError> {
        let EntryFields {
            title,
            author,
            genre,
            page_count,
            language,
            base_price,
        } = fields;

        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let page_count = u32::try_from(page_count)
            .ok()
            .filter(|pages| *pages > 0)
            .ok_or(ValidationError::NonPositivePageCount(page_count))?;
        if base_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(base_price));
        }
        // Valuation multiplies without overflow checks.
        if base_price.checked_mul(valuation::multiplier(kind)).is_none() {
            return Err(ValidationError::PriceOutOfRange(base_price));
        }

        Ok(Self {
            title,
            author,
            genre,
            page_count,
            language,
            base_price,
            kind,
        })
    }

    pub fn standard(fields: EntryFields) -> Result<Self, ValidationError> {
        Self::new(fields, EntryKind::Standard)
    }

    pub fn illustrated(fields: EntryFields, has_illustrations: bool) -> Result<Self, ValidationError> {
        Self::new(fields, EntryKind::Illustrated { has_illustrations })
    }

    pub fn collectible(fields: EntryFields, signed: bool, rare: bool) -> Result<Self, ValidationError> {
        Self::new(fields, EntryKind::Collectible { signed, rare })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Price before any kind-specific multiplier.
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}
