//! Eval command implementation
//!
//! Evaluates a curve, or one of its derivatives, at a point.

use expsum_core::curve::Curve;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config::OutputFormat;
use crate::curve_file::load_curve;
use crate::Result;

#[derive(Serialize)]
struct EvalReport {
    x: f64,
    order: u32,
    value: f64,
}

/// Run the eval command
pub fn run(curve_path: &Path, x: f64, order: u32, format: OutputFormat) -> Result<()> {
    let curve = load_curve(curve_path)?;
    info!("Evaluating derivative {} of {} at x = {}", order, curve, x);

    println!("{}", render(&curve, x, order, format)?);
    Ok(())
}

/// Render the value in the requested format
pub fn render(curve: &Curve, x: f64, order: u32, format: OutputFormat) -> Result<String> {
    let value = curve.derivative(order).evaluate(x);
    match format {
        OutputFormat::Table => Ok(match order {
            0 => format!("f({}) = {}", x, value),
            n => format!("f^({})({}) = {}", n, x, value),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&EvalReport { x, order, value })?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expsum_core::curve::Term;

    fn curve() -> Curve {
        Curve::new(vec![Term::new(1.0, 1.0), Term::new(-14.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_table() {
        assert_eq!(render(&curve(), 0.0, 0, OutputFormat::Table).unwrap(), "f(0) = -13");
        assert_eq!(render(&curve(), 0.0, 2, OutputFormat::Table).unwrap(), "f^(2)(0) = 1");
    }

    #[test]
    fn test_json() {
        let json = render(&curve(), 0.0, 1, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["order"], 1);
        assert_eq!(value["value"].as_f64().unwrap(), 1.0);
    }
}
