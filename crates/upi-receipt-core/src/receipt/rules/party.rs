//! Payee and payer name extraction.

use lazy_static::lazy_static;
use regex::Captures;

use super::patterns::{PAYEE_PAID_TO, PAYEE_TO_LINE, PAYER_FROM};
use super::{FieldRule, MatchScope, Variant};
use crate::models::config::ExtractionConfig;

lazy_static! {
    pub static ref PAYEE: FieldRule<String> = FieldRule::new(
        "payee_name",
        vec![
            Variant::new("paid-to", MatchScope::Window, &PAYEE_PAID_TO, parse_name),
            Variant::new("to-line", MatchScope::Window, &PAYEE_TO_LINE, parse_name),
        ],
    );

    pub static ref PAYER: FieldRule<String> = FieldRule::new(
        "payer_name",
        vec![Variant::new("from-line", MatchScope::Window, &PAYER_FROM, parse_name)],
    );
}

fn parse_name(caps: &Captures<'_>, config: &ExtractionConfig) -> Option<String> {
    clean_name(&caps[1], config.max_name_len)
}

/// Trim a captured display name, cap it at the configured length, and
/// reject captures that are really field labels the pattern ran into.
fn clean_name(raw: &str, max_chars: usize) -> Option<String> {
    let name = raw.trim().trim_end_matches(['.', '-']).trim_end();
    let name: String = name.chars().take(max_chars).collect();
    let name = name.trim_end();
    if name.chars().count() < 2 {
        return None;
    }

    const NON_NAME: &[&str] = &["upi", "bank", "account", "amount", "balance", "status"];
    let lower = name.to_lowercase();
    let first = lower.split_whitespace().next()?;
    if NON_NAME.contains(&first) {
        return None;
    }

    Some(name.to_string())
}
