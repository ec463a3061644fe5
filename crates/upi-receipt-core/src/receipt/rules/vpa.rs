//! Virtual payment address extraction.

use lazy_static::lazy_static;
use regex::Captures;

use super::patterns::{VPA_LABELED, VPA_TOKEN};
use super::{FieldRule, MatchScope, Variant};
use crate::models::config::ExtractionConfig;

lazy_static! {
    pub static ref VPA: FieldRule<String> = FieldRule::new(
        "payee_vpa",
        vec![
            Variant::new("labeled", MatchScope::Window, &VPA_LABELED, parse_vpa),
            Variant::new("bare-handle", MatchScope::Line, &VPA_TOKEN, parse_vpa).fallback(),
        ],
    );
}

fn parse_vpa(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<String> {
    normalize_vpa(&caps[1])
}

/// Validate and lowercase a `localpart@provider` handle.
///
/// Providers are single alphabetic tokens (`ybl`, `okaxis`, `paytm`); a
/// dotted or numeric host means the token is an e-mail address, not a VPA.
pub fn normalize_vpa(raw: &str) -> Option<String> {
    let token = raw.trim().trim_end_matches('.');
    let (local, provider) = token.rsplit_once('@')?;
    if local.is_empty() || provider.is_empty() {
        return None;
    }
    if !provider.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(token.to_lowercase())
}
