//! Parameter validation for render requests.
//!
//! Every numeric parameter has a documented range. Out-of-range values are
//! reported as errors rather than clamped; `render` refuses to run while any
//! error is present.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::{PaletteStore, PosterParams};

/// Run all parameter checks.
pub fn check_params(params: &PosterParams, store: &PaletteStore) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_layers(params).into());
    result.merge(checks::check_seed(params).into());
    result.merge(checks::check_radius(params).into());
    result.merge(checks::check_wobble(params).into());
    result.merge(checks::check_petals(params).into());
    result.merge(checks::check_custom_palette(params, store).into());

    result
}

/// Print diagnostics through the status printer.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}
