//! Error types for the upi-receipt-core library.

use thiserror::Error;

/// Main error type for the receipt extraction engine.
///
/// Field-level misses are not errors: a field that cannot be extracted is
/// reported as a `NotFound` or `Ambiguous` outcome on the record itself.
/// The engine rejects only input that carries no text at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// The input was empty, or contained nothing but whitespace and
    /// control characters.
    #[error("empty input: receipt text has no extractable lines")]
    EmptyInput,
}

/// Result type for the upi-receipt-core library.
pub type Result<T> = std::result::Result<T, ReceiptError>;
