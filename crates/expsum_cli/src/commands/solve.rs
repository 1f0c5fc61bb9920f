//! Solve command implementation
//!
//! Finds every root of a curve file on the configured search range.

use expsum_core::curve::Curve;
use expsum_core::isolation::{find_all_roots_with, RootList};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::curve_file::load_curve;
use crate::Result;

#[derive(Serialize)]
struct SolveReport<'a> {
    curve: String,
    #[serde(flatten)]
    result: &'a RootList,
    residuals: Vec<f64>,
}

/// Run the solve command
pub fn run(curve_path: &Path, config: &CliConfig) -> Result<()> {
    let curve = load_curve(curve_path)?;
    info!("Solving {} on [{}, {}]", curve, config.x_min, config.x_max);
    info!("  Method: {}", config.method);
    info!("  Tolerance: {:e}", config.tolerance);

    let found = find_all_roots_with(
        config.x_min,
        config.x_max,
        &curve,
        &config.isolation_config(),
    )?;
    info!("Found {} root(s)", found.len());

    println!("{}", render(&curve, &found, config.format)?);
    Ok(())
}

/// Render the roots in the requested format
pub fn render(curve: &Curve, found: &RootList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(curve, found)),
        OutputFormat::Json => {
            let report = SolveReport {
                curve: curve.to_string(),
                result: found,
                residuals: found.iter().map(|&x| curve.evaluate(x)).collect(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn render_table(curve: &Curve, found: &RootList) -> String {
    let mut out = format!(
        "f(x) = {}\nSearched: [{}, {}]\n",
        curve, found.searched.min, found.searched.max
    );
    out.push_str("┌─────┬──────────────────────────┬──────────────┐\n");
    out.push_str("│ #   │ Root                     │ f(root)      │\n");
    out.push_str("├─────┼──────────────────────────┼──────────────┤\n");
    if found.is_empty() {
        out.push_str("│     │ (no roots)               │              │\n");
    }
    for (i, &root) in found.iter().enumerate() {
        let residual = format!("{:.3e}", curve.evaluate(root));
        out.push_str(&format!(
            "│ {:<3} │ {:<24} │ {:<12} │\n",
            i + 1,
            root,
            residual
        ));
    }
    out.push_str("└─────┴──────────────────────────┴──────────────┘");

    for diagnostic in &found.diagnostics {
        out.push_str(&format!("\nwarning: {}", diagnostic));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use expsum_core::curve::Term;
    use expsum_core::isolation::find_all_roots;

    fn exp_minus_14() -> Curve {
        Curve::new(vec![Term::new(1.0, 1.0), Term::new(-14.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_table_lists_roots() {
        let curve = exp_minus_14();
        let found = find_all_roots(0.0, 4.0, &curve).unwrap();
        let table = render(&curve, &found, OutputFormat::Table).unwrap();

        assert!(table.starts_with("f(x) = 1*exp(1*x) - 14"));
        assert!(table.contains("│ 1   │ 2.63905732961"));
        assert!(!table.contains("(no roots)"));
    }

    #[test]
    fn test_table_without_roots() {
        let curve = Curve::new(vec![Term::new(1.0, 1.0), Term::new(14.0, 0.0)]).unwrap();
        let found = find_all_roots(0.0, 4.0, &curve).unwrap();
        let table = render(&curve, &found, OutputFormat::Table).unwrap();
        assert!(table.contains("(no roots)"));
    }

    #[test]
    fn test_table_lists_warnings() {
        let curve = Curve::new(vec![
            Term::new(1.0, 1.0),
            Term::new(-3.0, 0.0),
            Term::new(1.0, -1.0),
        ])
        .unwrap();
        // 2 cosh(x) - 3 stays negative around x = 0.
        let found = find_all_roots(0.0, 0.0, &curve).unwrap();
        let table = render(&curve, &found, OutputFormat::Table).unwrap();

        assert!(table.contains("Searched: [0, 0]\n┌"));
        assert!(table.contains("(no roots)"));
        assert!(table.ends_with("\nwarning: bound collapsed to 0 without a sign change"));
    }

    #[test]
    fn test_json_report() {
        let curve = exp_minus_14();
        let found = find_all_roots(0.0, 4.0, &curve).unwrap();
        let json = render(&curve, &found, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let roots = value["roots"].as_array().unwrap();
        assert_eq!(roots.len(), 1);
        approx::assert_abs_diff_eq!(
            roots[0].as_f64().unwrap(),
            14.0_f64.ln(),
            epsilon = 1e-9
        );
        assert_eq!(value["residuals"].as_array().unwrap().len(), 1);
        assert!(value["diagnostics"].as_array().unwrap().is_empty());
        assert_eq!(value["curve"], "1*exp(1*x) - 14");
    }
}
