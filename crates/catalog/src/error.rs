//! Error types for catalog construction, stocking and lending.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected catalog entry data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("page count must be greater than 0, got {0}")]
    NonPositivePageCount(i32),

    #[error("base price cannot be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("base price {0} is too large to be valued")]
    PriceOutOfRange(Decimal),
}

/// Failures while registering stock.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("quantity must be greater than 0, got {0}")]
    InvalidQuantity(i32),

    #[error("a different entry titled '{title}' is already registered")]
    TitleConflict { title: String },

    #[error("copy count for '{title}' would exceed {max}", max = u32::MAX)]
    CopyLimitExceeded { title: String },
}

/// Borrow requests that could not be served.
///
/// These are ordinary outcomes of a lending desk, reported to the patron and
/// never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LendingError {
    #[error("no book titled '{title}' in the library")]
    NotFound { title: String },

    #[error("'{title}' is out of stock")]
    OutOfStock { title: String },
}

impl LendingError {
    pub(crate) fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }

    pub(crate) fn out_of_stock(title: impl Into<String>) -> Self {
        Self::OutOfStock {
            title: title.into(),
        }
    }
}

/// Returned copies that could not be taken back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReturnError {
    #[error("'{title}' does not belong to the library")]
    NotFound { title: String },

    #[error("copy count for '{title}' is already at its limit")]
    CopyLimitExceeded { title: String },
}
