//! Common regex patterns for UPI receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount patterns (Indian format: 1,23,456.78, currency marker ₹/INR/Rs)
    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)\b(?:amount\s+paid|total\s+paid|amount|paid)\b\s*[:\-]?\s*(?:₹|INR|Rs\.?)?\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)"
    ).unwrap();

    pub static ref AMOUNT_CURRENCY: Regex = Regex::new(
        r"(?:₹|INR|Rs\.?)\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)"
    ).unwrap();

    // Date/time patterns, most specific first
    pub static ref DATETIME_TEXTUAL: Regex = Regex::new(
        r"(?i)\b(\d{1,2}\s+[a-z]{3,9}\s+\d{4}(?:,|\s+at)?\s+\d{1,2}[:.]\d{2}\s*[ap]m)\b"
    ).unwrap();

    pub static ref DATETIME_TIME_ON_DATE: Regex = Regex::new(
        r"(?i)\b(\d{1,2}[:.]\d{2}\s*[ap]m\s+on\s+\d{1,2}\s+[a-z]{3,9}\s+\d{4})\b"
    ).unwrap();

    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"(?i)\b(\d{1,2})[-/.](\d{1,2})[-/.](\d{4}|\d{2})(?:,?\s*(?:at\s+)?(\d{1,2})[:.](\d{2})(?:\s*([ap])\.?\s*m\.?)?)?"
    ).unwrap();

    pub static ref DATE_TEXTUAL: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+([a-z]{3,9})\s+(\d{4})\b"
    ).unwrap();

    // Payee / payer name labels. Captures are bounded loosely here; the
    // configured name length cap is applied during post-match cleanup.
    pub static ref PAYEE_PAID_TO: Regex = Regex::new(
        r"(?i)\bpaid\s+to\b\s*[:\-]?\s*([a-z][a-z .'@&]{1,254})"
    ).unwrap();

    pub static ref PAYEE_TO_LINE: Regex = Regex::new(
        r"(?im)^to\b\s*[:\-]?\s*([a-z][a-z .'@&]{1,254})$"
    ).unwrap();

    pub static ref PAYER_FROM: Regex = Regex::new(
        r"(?im)^from\b\s*[:\-]?\s*([a-z][a-z .'@&]{1,254})$"
    ).unwrap();

    // Virtual payment address (localpart@provider)
    pub static ref VPA_LABELED: Regex = Regex::new(
        r"(?i)\b(?:upi\s*id|vpa)\s*[:\-]?\s*([a-z0-9._\-]+@[a-z][a-z0-9.]*)"
    ).unwrap();

    pub static ref VPA_TOKEN: Regex = Regex::new(
        r"(?i)\b([a-z0-9._\-]+@[a-z][a-z0-9.]*)"
    ).unwrap();

    // Transaction references. UTR is twelve decimal digits; UPI transaction
    // ids are longer alphanumeric tokens, so the two shapes stay apart even
    // when labels are OCR-garbled.
    pub static ref UTR_LABELED: Regex = Regex::new(
        r"(?i)\butr(?:\s*(?:no|number))?\.?\s*[:#\-]?\s*(\d{12})\b"
    ).unwrap();

    pub static ref UTR_TOKEN: Regex = Regex::new(
        r"\b(\d{12})\b"
    ).unwrap();

    pub static ref UPI_TXN_LABELED: Regex = Regex::new(
        r"(?i)\b(?:upi\s+)?(?:txn|transaction)\s*\.?\s*id\s*[:#\-]?\s*([a-z0-9\-]+)\b"
    ).unwrap();

    pub static ref UPI_TXN_TOKEN: Regex = Regex::new(
        r"(?i)\b([a-z0-9\-]{10,23})\b"
    ).unwrap();

    // Bank name
    pub static ref BANK_LABELED: Regex = Regex::new(
        r"(?i)\b(?:bank(?:ing)?\s+name|debited\s+from|credited\s+to)\b\s*[:\-]?\s*([a-z][a-z0-9 .&()\-]{1,60})"
    ).unwrap();

    pub static ref BANK_KNOWN: Regex = Regex::new(
        r"(?i)\b(state\s+bank\s+of\s+india|sbi|icici|hdfc|axis|kotak(?:\s+mahindra)?|punjab\s+national\s+bank|pnb|bank\s+of\s+baroda|canara\s+bank|union\s+bank(?:\s+of\s+india)?|yes\s+bank|idbi|indusind|federal\s+bank)(?:\s+bank)?\b"
    ).unwrap();

    // Status
    pub static ref STATUS_LABELED: Regex = Regex::new(
        r"(?i)\bstatus\b\s*[:\-]?\s*([a-z][a-z ]{0,40})"
    ).unwrap();

    pub static ref STATUS_KEYWORD: Regex = Regex::new(
        r"(?i)\b(completed|complete|successful|success|succeeded|failed|failure|declined|pending|processing)\b"
    ).unwrap();
}
