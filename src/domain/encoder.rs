//! EPC069-12 ("SEPA Credit Transfer QR") payload serialization.

use super::payment::PaymentRequest;

pub const SERVICE_TAG: &str = "BCD";
pub const VERSION: &str = "002";
/// Character set `1` is UTF-8.
pub const CHARACTER_SET: &str = "1";
pub const IDENTIFICATION: &str = "SCT";
/// Line separator mandated by the payload format, independent of the platform.
pub const LINE_SEPARATOR: &str = "\n";

/// Serializes a validated request into the payload text.
///
/// Lines, in order: service tag, version, character set, identification,
/// BIC, name, IBAN, amount, purpose, structured reference, unstructured
/// reference. Empty trailing lines are left out, so a request without a
/// reference ends at the amount.
pub fn encode(request: &PaymentRequest) -> String {
    let amount = request.amount().to_payload();
    let mut lines = vec![
        SERVICE_TAG,
        VERSION,
        CHARACTER_SET,
        IDENTIFICATION,
        request.bic().map(|bic| bic.as_str()).unwrap_or_default(),
        request.name().as_str(),
        request.iban().as_str(),
        amount.as_str(),
        "",
        "",
        request.reference().map(|r| r.as_str()).unwrap_or_default(),
    ];
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join(LINE_SEPARATOR)
}
