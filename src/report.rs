use std::io::{self, Write};

use starknet::core::types::Felt;

use crate::{
    constants::{EVENT_NAMES, REPORT_HEADER},
    error::SelectorError,
    selector::{compute_selectors, derive_selector},
};

/// Writes the selector report for `names` to `out`.
///
/// Every selector is derived before anything is written, so a derivation failure leaves `out`
/// untouched.
pub fn write_report<W, F>(out: &mut W, names: &[&'static str], derive: F) -> Result<(), SelectorError>
where
    W: Write,
    F: Fn(&str) -> Result<Felt, SelectorError>,
{
    let selectors = compute_selectors(names, derive)?;

    writeln!(out, "{REPORT_HEADER}")?;
    for selector in &selectors {
        writeln!(out, "{selector}")?;
    }
    out.flush()?;

    tracing::info!(count = selectors.len(), "wrote event selector report");
    Ok(())
}

/// Prints the report for the known events to stdout.
pub fn print_report() -> Result<(), SelectorError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &EVENT_NAMES, derive_selector)
}
