//! Bound command implementation
//!
//! Prints the analytic interval outside of which a curve has no root.

use expsum_core::curve::Curve;
use expsum_core::isolation::{bound_range, Interval};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config::OutputFormat;
use crate::curve_file::load_curve;
use crate::Result;

#[derive(Serialize)]
struct BoundReport {
    curve: String,
    bound: Interval,
    empty: bool,
}

/// Run the bound command
pub fn run(curve_path: &Path, format: OutputFormat) -> Result<()> {
    let curve = load_curve(curve_path)?;
    info!("Bounding roots of {}", curve);

    println!("{}", render(&curve, format)?);
    Ok(())
}

/// Render the bound in the requested format
pub fn render(curve: &Curve, format: OutputFormat) -> Result<String> {
    let bound = bound_range(curve);
    match format {
        OutputFormat::Table => {
            let mut out = format!(
                "f(x) = {}\nLower bound: {}\nUpper bound: {}",
                curve, bound.min, bound.max
            );
            if bound.is_empty() {
                out.push_str("\nBounds cross: no real roots");
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&BoundReport {
            curve: curve.to_string(),
            bound,
            empty: bound.is_empty(),
        })?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expsum_core::curve::Term;

    #[test]
    fn test_table() {
        let curve = Curve::new(vec![
            Term::new(-2.0, 0.0),
            Term::new(-1.0, 0.1),
            Term::new(0.01, 0.2),
        ])
        .unwrap();
        let table = render(&curve, OutputFormat::Table).unwrap();
        // ln(0.01 / 2) / (0 - 0.2)
        assert!(table.contains("Lower bound: 26.4915868"));
        // ln(2 * 1 / 0.01) / (0.2 - 0.1)
        assert!(table.contains("Upper bound: 52.983173"));
        assert!(!table.contains("no real roots"));
    }

    #[test]
    fn test_json() {
        let curve = Curve::new(vec![Term::new(1.0, 1.0), Term::new(-14.0, 0.0)]).unwrap();
        let json = render(&curve, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        approx::assert_abs_diff_eq!(
            value["bound"]["max"].as_f64().unwrap(),
            14.0_f64.ln(),
            epsilon = 1e-12
        );
        assert_eq!(value["empty"], false);
    }
}
