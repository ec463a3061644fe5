//! UTR and UPI transaction id extraction.
//!
//! The two reference numbers are distinguished by shape, not by label
//! alone: a UTR is exactly twelve decimal digits, while app-assigned UPI
//! transaction ids are longer alphanumeric tokens. Labels are still tried
//! first because they are the strongest evidence when OCR kept them intact.

use lazy_static::lazy_static;
use regex::Captures;

use super::patterns::{UPI_TXN_LABELED, UPI_TXN_TOKEN, UTR_LABELED, UTR_TOKEN};
use super::{FieldRule, MatchScope, Variant};
use crate::models::config::ExtractionConfig;

lazy_static! {
    pub static ref UTR: FieldRule<String> = FieldRule::new(
        "utr",
        vec![
            Variant::new("labeled", MatchScope::Window, &UTR_LABELED, parse_utr),
            Variant::new("bare-12-digit", MatchScope::Line, &UTR_TOKEN, parse_utr).fallback(),
        ],
    );

    pub static ref UPI_TXN_ID: FieldRule<String> = FieldRule::new(
        "upi_txn_id",
        vec![
            Variant::new("labeled", MatchScope::Window, &UPI_TXN_LABELED, parse_labeled_txn_id),
            Variant::new("bare-token", MatchScope::Line, &UPI_TXN_TOKEN, parse_bare_txn_id)
                .fallback(),
        ],
    );
}

fn parse_utr(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<String> {
    // The pattern already pins the twelve-digit shape.
    Some(caps[1].to_string())
}

fn parse_labeled_txn_id(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<String> {
    let token = caps[1].to_string();
    valid_txn_id_shape(&token, false).then_some(token)
}

fn parse_bare_txn_id(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<String> {
    let token = caps[1].to_string();
    valid_txn_id_shape(&token, true).then_some(token)
}

/// Shape check for UPI transaction ids: 10-23 chars of `[A-Za-z0-9-]` with
/// at least one digit. Bare tokens must also contain a letter so the
/// generic variant cannot swallow plain twelve-digit UTRs.
fn valid_txn_id_shape(token: &str, require_letter: bool) -> bool {
    if !(10..=23).contains(&token.len()) {
        return false;
    }
    if !token.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    !require_letter || token.chars().any(|c| c.is_ascii_alphabetic())
}
