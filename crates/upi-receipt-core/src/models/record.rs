//! Payment record models with per-field extraction outcomes.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedText;

/// Outcome of extracting one semantic field.
///
/// A `Found` value has already passed the winning variant's post-match
/// normalization and validation. `Ambiguous` holds two or more *distinct*
/// valid candidates from the same variant pass; the engine never silently
/// picks one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FieldOutcome<T> {
    /// A single valid value, with the index of the pattern variant that
    /// produced it.
    Found { value: T, variant: usize },

    /// No pattern variant yielded a valid candidate.
    NotFound,

    /// Multiple conflicting valid candidates; requires manual review.
    Ambiguous { candidates: Vec<T> },
}

impl<T> FieldOutcome<T> {
    /// The extracted value, if exactly one was found.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldOutcome::Found { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FieldOutcome::Found { .. })
    }

    /// True for `NotFound` and `Ambiguous`: the caller must treat the field
    /// as unresolved rather than as a hard failure.
    pub fn needs_review(&self) -> bool {
        !self.is_found()
    }
}

/// Transaction status, normalized to a closed set.
///
/// Unrecognized wording maps to `Unknown`; a status is never fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxnStatus {
    Success,
    Failed,
    Pending,
    Unknown,
}

impl TxnStatus {
    /// Map a single status keyword to the closed set.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "success" | "successful" | "succeeded" | "completed" | "complete" => {
                Some(TxnStatus::Success)
            }
            "failed" | "failure" | "declined" => Some(TxnStatus::Failed),
            "pending" | "processing" => Some(TxnStatus::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for TxnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TxnStatus::Success => "Success",
            TxnStatus::Failed => "Failed",
            TxnStatus::Pending => "Pending",
            TxnStatus::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Payment app that issued the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "phonepe")]
    PhonePe,
    #[serde(rename = "google_pay")]
    GooglePay,
    #[serde(rename = "paytm")]
    Paytm,
    /// Generic UPI receipt with no recognizable app branding.
    #[serde(rename = "upi")]
    Upi,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::PhonePe => "PhonePe",
            Channel::GooglePay => "Google Pay",
            Channel::Paytm => "Paytm",
            Channel::Upi => "UPI",
        };
        f.write_str(name)
    }
}

/// A structured transaction record extracted from one receipt image.
///
/// Partial records are valid: a receipt missing a bank name is still
/// useful. The raw and normalized text are retained for audit; identity
/// and storage lifetime are assigned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Issuing app, detected from branding keywords.
    pub channel: Channel,

    /// Transaction amount: positive, at most two fraction digits.
    pub amount: FieldOutcome<Decimal>,

    /// Currency code (default: INR).
    pub currency: String,

    /// Transaction date and time.
    pub txn_time: FieldOutcome<NaiveDateTime>,

    /// Sender display name.
    pub payer_name: FieldOutcome<String>,

    /// Recipient display name.
    pub payee_name: FieldOutcome<String>,

    /// Recipient virtual payment address (`localpart@provider`).
    pub payee_vpa: FieldOutcome<String>,

    /// Debited bank or wallet, canonicalized where recognized.
    pub bank_name: FieldOutcome<String>,

    /// Unique Transaction Reference: twelve decimal digits.
    pub utr: FieldOutcome<String>,

    /// UPI transaction id assigned by the issuing app.
    pub upi_txn_id: FieldOutcome<String>,

    /// Transaction status.
    pub status: FieldOutcome<TxnStatus>,

    /// Unmodified OCR text, kept for audit.
    pub raw_text: String,

    /// Normalized text the rules actually matched against.
    pub normalized: NormalizedText,
}

impl PaymentRecord {
    /// Number of required fields that resolved to a single value.
    pub fn fields_found(&self) -> usize {
        [
            self.amount.is_found(),
            self.txn_time.is_found(),
            self.payee_name.is_found(),
            self.payee_vpa.is_found(),
            self.bank_name.is_found(),
            self.utr.is_found(),
            self.upi_txn_id.is_found(),
            self.status.is_found(),
        ]
        .into_iter()
        .filter(|found| *found)
        .count()
    }

    /// True when any required field is missing or ambiguous.
    pub fn needs_review(&self) -> bool {
        self.fields_found() < 8
    }

    /// Flatten the record to stable column names for CSV/PDF export
    /// collaborators. Unresolved fields render as empty strings; deciding
    /// what to do about them is the caller's job.
    pub fn to_columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("channel", self.channel.to_string()),
            ("payer_name", display_column(&self.payer_name)),
            ("payee_name", display_column(&self.payee_name)),
            ("payee_vpa", display_column(&self.payee_vpa)),
            ("bank_name", display_column(&self.bank_name)),
            (
                "amount",
                self.amount
                    .value()
                    .map(|amount| format!("{:.2}", amount))
                    .unwrap_or_default(),
            ),
            ("currency", self.currency.clone()),
            ("utr", display_column(&self.utr)),
            ("upi_txn_id", display_column(&self.upi_txn_id)),
            ("status", display_column(&self.status)),
            (
                "txn_time",
                self.txn_time
                    .value()
                    .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
            ),
        ]
    }

    /// Serialize the record as pretty JSON for audit logs.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn display_column<T: fmt::Display>(outcome: &FieldOutcome<T>) -> String {
    outcome.value().map(|v| v.to_string()).unwrap_or_default()
}
