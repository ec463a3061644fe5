//! Amount extraction for UPI receipts.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Captures;
use rust_decimal::Decimal;

use super::patterns::{AMOUNT_CURRENCY, AMOUNT_LABELED};
use super::{FieldRule, MatchScope, Variant};
use crate::models::config::ExtractionConfig;

lazy_static! {
    /// Amount rule: an explicit "Amount Paid" style label beats any bare
    /// currency-marked number elsewhere on the receipt (which may be an
    /// account balance).
    pub static ref AMOUNT: FieldRule<Decimal> = FieldRule::new(
        "amount",
        vec![
            Variant::new("labeled", MatchScope::Window, &AMOUNT_LABELED, parse_capture),
            Variant::new("currency-marked", MatchScope::Line, &AMOUNT_CURRENCY, parse_capture)
                .fallback(),
        ],
    );
}

fn parse_capture(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<Decimal> {
    parse_inr_amount(&caps[1])
}

/// Parse an Indian-formatted amount ("1,23,456.78" or "250.00").
///
/// Commas are grouping only and are stripped, not validated; the value must
/// come out strictly positive.
pub fn parse_inr_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.replace(',', "");
    let amount = Decimal::from_str(&cleaned).ok()?;
    (amount > Decimal::ZERO).then_some(amount)
}
