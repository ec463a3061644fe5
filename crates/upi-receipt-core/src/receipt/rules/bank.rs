//! Bank name extraction and canonicalization.

use lazy_static::lazy_static;
use regex::Captures;

use super::patterns::{BANK_KNOWN, BANK_LABELED};
use super::{FieldRule, MatchScope, Variant};
use crate::models::config::ExtractionConfig;

lazy_static! {
    pub static ref BANK: FieldRule<String> = FieldRule::new(
        "bank_name",
        vec![
            Variant::new("labeled", MatchScope::Window, &BANK_LABELED, parse_labeled),
            Variant::new("known-institution", MatchScope::Line, &BANK_KNOWN, parse_known)
                .fallback(),
        ],
    );
}

fn parse_labeled(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<String> {
    let raw = caps[1].trim();
    if raw.len() < 2 {
        return None;
    }
    Some(canonical_bank(raw))
}

fn parse_known(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<String> {
    Some(canonical_bank(&caps[1]))
}

/// Map abbreviations and partial captures onto canonical institution
/// names; unrecognized banks pass through trimmed.
fn canonical_bank(raw: &str) -> String {
    const CANON: &[(&str, &str)] = &[
        ("state bank of india", "State Bank of India"),
        ("sbi", "State Bank of India"),
        ("punjab national bank", "Punjab National Bank"),
        ("pnb", "Punjab National Bank"),
        ("bank of baroda", "Bank of Baroda"),
        ("union bank", "Union Bank of India"),
        ("canara bank", "Canara Bank"),
        ("federal bank", "Federal Bank"),
        ("yes bank", "Yes Bank"),
        ("icici", "ICICI Bank"),
        ("hdfc", "HDFC Bank"),
        ("axis", "Axis Bank"),
        ("kotak", "Kotak Mahindra Bank"),
        ("idbi", "IDBI Bank"),
        ("indusind", "IndusInd Bank"),
    ];

    let lower = raw.to_lowercase();
    for (needle, canonical) in CANON {
        if lower.contains(needle) {
            return (*canonical).to_string();
        }
    }
    raw.trim().trim_end_matches(['.', '-', ':']).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::FieldOutcome;
    use crate::normalize::normalize;

    fn found(value: &str, variant: usize) -> FieldOutcome<String> {
        FieldOutcome::Found {
            value: value.to_string(),
            variant,
        }
    }

    #[test]
    fn test_canonical_bank() {
        assert_eq!(canonical_bank("SBI"), "State Bank of India");
        assert_eq!(canonical_bank("HDFC Bank XX1234"), "HDFC Bank");
        assert_eq!(canonical_bank("Dhanlaxmi Bank"), "Dhanlaxmi Bank");
    }

    #[test]
    fn test_debited_from_label() {
        let text = normalize("Debited from HDFC Bank XX1234");
        assert_eq!(BANK.apply(&text), found("HDFC Bank", 0));
    }

    #[test]
    fn test_banking_name_label() {
        let text = normalize("Banking Name: State Bank of India");
        assert_eq!(BANK.apply(&text), found("State Bank of India", 0));
    }

    #[test]
    fn test_unrecognized_bank_passes_through() {
        let text = normalize("Debited from Dhanlaxmi Bank");
        assert_eq!(BANK.apply(&text), found("Dhanlaxmi Bank", 0));
    }

    #[test]
    fn test_known_institution_without_label() {
        let text = normalize("Axis Bank ****8842");
        assert_eq!(BANK.apply(&text), found("Axis Bank", 1));
    }

    #[test]
    fn test_two_institutions_are_ambiguous() {
        let text = normalize("ICICI ****1111\nAxis Bank ****2222");
        match BANK.apply(&text) {
            FieldOutcome::Ambiguous { candidates } => {
                assert_eq!(candidates, vec!["ICICI Bank".to_string(), "Axis Bank".to_string()]);
            }
            other => panic!("expected ambiguous outcome, got {:?}", other),
        }
    }
}
