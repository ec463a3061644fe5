//! Issuing-app detection from receipt branding keywords.

use crate::models::record::Channel;
use crate::normalize::NormalizedText;

/// Detect which payment app produced the receipt. Always yields a value;
/// unbranded receipts fall back to the generic [`Channel::Upi`].
pub fn detect_channel(text: &NormalizedText) -> Channel {
    let haystack = text.joined().to_lowercase();
    if haystack.contains("phonepe") {
        Channel::PhonePe
    } else if haystack.contains("google pay") || haystack.contains("gpay") || haystack.contains("g pay")
    {
        Channel::GooglePay
    } else if haystack.contains("paytm") {
        Channel::Paytm
    } else {
        Channel::Upi
    }
}
