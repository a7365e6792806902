//! Time related utils.

use chrono::Utc;

/// DateTime used across paysign, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Signature date format: "Fri, 16 Oct 2026 09:30:00 +0000"
const SIGNATURE_DATE: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Create a DateTime for now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into the RFC 1123 style date carried by the `Date` header
/// and covered by the signature.
pub fn format_signature_date(t: DateTime) -> String {
    t.format(SIGNATURE_DATE).to_string()
}
