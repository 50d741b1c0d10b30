//! Document-wide currency detection

use crate::app::models::Currency;
use crate::constants::CURRENCY_PROBES;

/// Detect the currency of a whole source document
///
/// Probes are tried in [`CURRENCY_PROBES`] order and the first one found
/// anywhere in the text decides. Since the bare `$` probe precedes `US$`, a
/// document marked only with `US$` resolves to pesos. Defaults to ARS.
pub fn detect_currency(document: &str) -> Currency {
    CURRENCY_PROBES
        .iter()
        .find(|probe| document.contains(**probe))
        .map(|probe| classify_probe(probe))
        .unwrap_or_default()
}

fn classify_probe(probe: &str) -> Currency {
    if probe.contains("AR") {
        Currency::Ars
    } else if probe.contains("US") {
        Currency::Usd
    } else {
        Currency::Ars
    }
}
