//! Curve file loading
//!
//! Curves are read from TOML:
//!
//! ```toml
//! [[terms]]
//! coefficient = 5.0
//! exponent = -0.6666666666666666
//!
//! [[terms]]
//! coefficient = -2.0
//! exponent = 0.0
//! ```
//!
//! or from JSON, either a bare list of terms or `{ "terms": [...] }`.

use expsum_core::curve::{Curve, Term};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct CurveDocument {
    terms: Vec<Term>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCurve {
    List(Vec<Term>),
    Document(CurveDocument),
}

/// Load and validate a curve file, picking the format by extension
pub fn load_curve(path: &Path) -> Result<Curve> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(CliError::FileNotFound(display));
    }

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let terms = match extension.as_deref() {
        Some("toml") => parse_toml(&content),
        Some("json") => parse_json(&content),
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "Unsupported curve file: {}. Supported extensions: toml, json",
                display
            )))
        }
    }
    .map_err(|message| CliError::CurveFile {
        path: display.clone(),
        message,
    })?;

    let curve = Curve::new(terms)?;
    debug!(path = %path.display(), terms = curve.len(), "loaded curve");
    Ok(curve)
}

fn parse_toml(content: &str) -> std::result::Result<Vec<Term>, String> {
    toml::from_str::<CurveDocument>(content)
        .map(|doc| doc.terms)
        .map_err(|e| e.to_string())
}

fn parse_json(content: &str) -> std::result::Result<Vec<Term>, String> {
    match serde_json::from_str::<JsonCurve>(content).map_err(|e| e.to_string())? {
        JsonCurve::List(terms) => Ok(terms),
        JsonCurve::Document(doc) => Ok(doc.terms),
    }
}
