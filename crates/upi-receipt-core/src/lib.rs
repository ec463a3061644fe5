//! Core library for UPI payment-receipt text extraction.
//!
//! This crate provides:
//! - Normalization of raw OCR text into canonical line-oriented form
//! - Rule-based field extraction (amount, date/time, payee, VPA, UTR,
//!   UPI transaction id, bank, status) with per-field outcomes
//! - Structured, serializable payment records for downstream storage
//!   and export
//!
//! The engine is a pure function boundary: raw text in, one
//! [`PaymentRecord`] out. It holds no shared mutable state, performs no
//! I/O, and never fails on malformed text - an unreadable receipt just
//! produces a record full of `NotFound` outcomes. OCR invocation and
//! persistence belong to the caller.

pub mod error;
pub mod models;
pub mod normalize;
pub mod receipt;

pub use error::{ReceiptError, Result};
pub use models::config::ExtractionConfig;
pub use models::record::{Channel, FieldOutcome, PaymentRecord, TxnStatus};
pub use normalize::{normalize, NormalizedText};
pub use receipt::{ExtractionResult, ReceiptParser, UpiReceiptParser};
