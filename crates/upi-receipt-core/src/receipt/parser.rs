//! Rule-driven receipt parser producing structured payment records.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::{ReceiptError, Result};
use crate::models::config::ExtractionConfig;
use crate::models::record::{FieldOutcome, PaymentRecord};
use crate::normalize::{normalize, NormalizedText};

use super::rules;
use super::ReceiptParser;

/// Result of parsing one receipt.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The extracted record.
    pub record: PaymentRecord,
    /// One entry per required field that needs review.
    pub warnings: Vec<String>,
    /// Overall extraction confidence (0.0 - 1.0).
    pub confidence: f32,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based parser for UPI payment receipts.
pub struct UpiReceiptParser {
    config: ExtractionConfig,
}

impl UpiReceiptParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create a parser with explicit configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Enable or disable generic fallback variants.
    pub fn with_fallback_variants(mut self, enabled: bool) -> Self {
        self.config.use_fallback_variants = enabled;
        self
    }

    /// Run every field rule against already-normalized text.
    ///
    /// Infallible and deterministic: identical normalized text always
    /// yields an identical record, and the worst case is a record where
    /// every field is `NotFound`.
    pub fn extract(&self, raw: &str, text: &NormalizedText) -> PaymentRecord {
        let config = &self.config;

        let record = PaymentRecord {
            channel: rules::detect_channel(text),
            amount: rules::AMOUNT.apply_with(text, config),
            currency: config.currency.clone(),
            txn_time: rules::TXN_TIME.apply_with(text, config),
            payer_name: rules::PAYER.apply_with(text, config),
            payee_name: rules::PAYEE.apply_with(text, config),
            payee_vpa: rules::VPA.apply_with(text, config),
            bank_name: rules::BANK.apply_with(text, config),
            utr: rules::UTR.apply_with(text, config),
            upi_txn_id: rules::UPI_TXN_ID.apply_with(text, config),
            status: rules::STATUS.apply_with(text, config),
            raw_text: raw.to_string(),
            normalized: text.clone(),
        };

        debug!(
            "extracted {}/8 required fields (channel: {})",
            record.fields_found(),
            record.channel
        );

        record
    }
}

impl Default for UpiReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for UpiReceiptParser {
    fn parse(&self, raw: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        let text = normalize(raw);
        if text.is_empty() {
            return Err(ReceiptError::EmptyInput);
        }

        info!("parsing receipt text ({} chars, {} lines)", raw.len(), text.len());

        let record = self.extract(raw, &text);
        let warnings = field_warnings(&record);
        let confidence = score_confidence(&record);

        Ok(ExtractionResult {
            record,
            warnings,
            confidence,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

fn field_warnings(record: &PaymentRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    warn_field(&mut warnings, "amount", &record.amount);
    warn_field(&mut warnings, "txn_time", &record.txn_time);
    warn_field(&mut warnings, "payee_name", &record.payee_name);
    warn_field(&mut warnings, "payee_vpa", &record.payee_vpa);
    warn_field(&mut warnings, "bank_name", &record.bank_name);
    warn_field(&mut warnings, "utr", &record.utr);
    warn_field(&mut warnings, "upi_txn_id", &record.upi_txn_id);
    warn_field(&mut warnings, "status", &record.status);
    warnings
}

fn warn_field<T>(warnings: &mut Vec<String>, field: &str, outcome: &FieldOutcome<T>) {
    match outcome {
        FieldOutcome::NotFound => warnings.push(format!("could not extract {}", field)),
        FieldOutcome::Ambiguous { candidates } => warnings.push(format!(
            "{} is ambiguous: {} conflicting candidates",
            field,
            candidates.len()
        )),
        FieldOutcome::Found { .. } => {}
    }
}

fn score_confidence(record: &PaymentRecord) -> f32 {
    let mut confidence = 1.0f32;
    if !record.amount.is_found() {
        confidence -= 0.25;
    }
    if !record.txn_time.is_found() {
        confidence -= 0.15;
    }
    if !record.utr.is_found() && !record.upi_txn_id.is_found() {
        confidence -= 0.2;
    }
    if !record.payee_name.is_found() && !record.payee_vpa.is_found() {
        confidence -= 0.15;
    }
    if !record.status.is_found() {
        confidence -= 0.1;
    }
    if !record.bank_name.is_found() {
        confidence -= 0.05;
    }
    confidence.max(0.0)
}
