//! Transaction status extraction.

use lazy_static::lazy_static;
use regex::Captures;

use super::patterns::{STATUS_KEYWORD, STATUS_LABELED};
use super::{FieldRule, MatchScope, Variant};
use crate::models::config::ExtractionConfig;
use crate::models::record::TxnStatus;

lazy_static! {
    pub static ref STATUS: FieldRule<TxnStatus> = FieldRule::new(
        "status",
        vec![
            Variant::new("labeled", MatchScope::Window, &STATUS_LABELED, parse_labeled),
            Variant::new("keyword", MatchScope::Line, &STATUS_KEYWORD, parse_keyword).fallback(),
        ],
    );
}

/// A "Status:" label wins even when its wording is unrecognized; in that
/// case the value is `Unknown` rather than something invented.
fn parse_labeled(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<TxnStatus> {
    let status = caps[1]
        .split_whitespace()
        .find_map(TxnStatus::from_keyword)
        .unwrap_or(TxnStatus::Unknown);
    Some(status)
}

fn parse_keyword(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<TxnStatus> {
    TxnStatus::from_keyword(&caps[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::FieldOutcome;
    use crate::normalize::normalize;

    fn found(value: TxnStatus, variant: usize) -> FieldOutcome<TxnStatus> {
        FieldOutcome::Found { value, variant }
    }

    #[test]
    fn test_labeled_status() {
        let text = normalize("Status: Transaction Successful");
        assert_eq!(STATUS.apply(&text), found(TxnStatus::Success, 0));
    }

    #[test]
    fn test_labeled_status_on_next_line() {
        let text = normalize("Status\nFailed");
        assert_eq!(STATUS.apply(&text), found(TxnStatus::Failed, 0));
    }

    #[test]
    fn test_unrecognized_labeled_status_is_unknown() {
        let text = normalize("Status: Refund Initiated");
        assert_eq!(STATUS.apply(&text), found(TxnStatus::Unknown, 0));
    }

    #[test]
    fn test_bare_keyword() {
        assert_eq!(STATUS.apply(&normalize("Completed")), found(TxnStatus::Success, 1));
        assert_eq!(STATUS.apply(&normalize("Payment declined")), found(TxnStatus::Failed, 1));
        assert_eq!(STATUS.apply(&normalize("Processing")), found(TxnStatus::Pending, 1));
    }

    #[test]
    fn test_synonyms_collapse_to_one_status() {
        // "Completed" and "Successful" normalize to the same value, so this
        // is a single confident match rather than a conflict.
        let text = normalize("Payment Successful\nCompleted");
        assert_eq!(STATUS.apply(&text), found(TxnStatus::Success, 1));
    }

    #[test]
    fn test_conflicting_keywords_are_ambiguous() {
        let text = normalize("Failed\nretry Successful");
        match STATUS.apply(&text) {
            FieldOutcome::Ambiguous { candidates } => {
                assert_eq!(candidates, vec![TxnStatus::Failed, TxnStatus::Success]);
            }
            other => panic!("expected ambiguous outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_no_status_is_not_found() {
        assert_eq!(STATUS.apply(&normalize("₹ 250.00")), FieldOutcome::NotFound);
    }
}
