//! Rule-based field extractors for UPI payment receipts.
//!
//! Each semantic field has one [`FieldRule`]: an ordered, immutable list of
//! pattern variants declared from most specific (app-specific label) to most
//! generic (bare shape fallback). Declaration order is the precedence order,
//! so an explicit "Paid to" label always beats a bare name-like token.

pub mod amount;
pub mod bank;
pub mod channel;
pub mod datetime;
pub mod party;
pub mod patterns;
pub mod reference;
pub mod status;
pub mod vpa;

pub use amount::AMOUNT;
pub use bank::BANK;
pub use channel::detect_channel;
pub use datetime::TXN_TIME;
pub use party::{PAYEE, PAYER};
pub use reference::{UPI_TXN_ID, UTR};
pub use status::STATUS;
pub use vpa::VPA;

use regex::{Captures, Regex};

use crate::models::config::ExtractionConfig;
use crate::models::record::FieldOutcome;
use crate::normalize::NormalizedText;

/// Where a variant's pattern is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Each normalized line on its own.
    Line,
    /// Adjacent-line pairs joined with a newline, for layouts that put a
    /// label on one line and its value on the next.
    Window,
}

/// One pattern variant of a field rule: a pattern plus the post-match
/// normalizer/validator that turns a capture into a typed value.
pub struct Variant<T: 'static> {
    /// Short name used in logs and tests.
    pub name: &'static str,
    pub scope: MatchScope,
    /// Generic shape-only pattern; skipped when fallbacks are disabled.
    pub fallback: bool,
    pub pattern: &'static Regex,
    /// Post-match normalizer and validator, given the active extraction
    /// config. Returning `None` discards the candidate as invalid.
    pub parse: fn(&Captures<'_>, &ExtractionConfig) -> Option<T>,
}

impl<T> Variant<T> {
    pub fn new(
        name: &'static str,
        scope: MatchScope,
        pattern: &'static Regex,
        parse: fn(&Captures<'_>, &ExtractionConfig) -> Option<T>,
    ) -> Self {
        Self {
            name,
            scope,
            fallback: false,
            pattern,
            parse,
        }
    }

    /// Mark this variant as a generic fallback.
    pub fn fallback(mut self) -> Self {
        self.fallback = true;
        self
    }
}

/// An ordered, immutable set of pattern variants for one semantic field.
pub struct FieldRule<T: 'static> {
    pub field: &'static str,
    pub variants: Vec<Variant<T>>,
}

impl<T: Clone + PartialEq> FieldRule<T> {
    pub fn new(field: &'static str, variants: Vec<Variant<T>>) -> Self {
        Self { field, variants }
    }

    /// Apply the rule with default configuration.
    pub fn apply(&self, text: &NormalizedText) -> FieldOutcome<T> {
        self.apply_with(text, &ExtractionConfig::default())
    }

    /// Apply the rule under the given configuration.
    ///
    /// The first variant in declaration order that yields at least one valid
    /// candidate decides the outcome: exactly one distinct value is `Found`,
    /// more than one is `Ambiguous`. Candidates are deduplicated by value
    /// first, so the same value matched twice is not a conflict.
    pub fn apply_with(&self, text: &NormalizedText, config: &ExtractionConfig) -> FieldOutcome<T> {
        for (index, variant) in self.variants.iter().enumerate() {
            if variant.fallback && !config.use_fallback_variants {
                continue;
            }
            let mut candidates = collect_candidates(variant, text, config);
            match candidates.len() {
                0 => continue,
                1 => {
                    return FieldOutcome::Found {
                        value: candidates.remove(0),
                        variant: index,
                    };
                }
                _ => return FieldOutcome::Ambiguous { candidates },
            }
        }
        FieldOutcome::NotFound
    }
}

fn collect_candidates<T: PartialEq>(
    variant: &Variant<T>,
    text: &NormalizedText,
    config: &ExtractionConfig,
) -> Vec<T> {
    let mut found = Vec::new();
    match variant.scope {
        MatchScope::Line => {
            for line in text.lines() {
                collect_matches(variant, line, config, &mut found);
            }
        }
        MatchScope::Window => {
            for window in text.windows() {
                collect_matches(variant, &window, config, &mut found);
            }
        }
    }
    found
}

fn collect_matches<T: PartialEq>(
    variant: &Variant<T>,
    haystack: &str,
    config: &ExtractionConfig,
    out: &mut Vec<T>,
) {
    for caps in variant.pattern.captures_iter(haystack) {
        if let Some(value) = (variant.parse)(&caps, config) {
            if !out.contains(&value) {
                out.push(value);
            }
        }
    }
}
