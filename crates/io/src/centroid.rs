//! Centroid file loading: dialect detection, coordinate normalization,
//! row-by-row classification into a registry.
//!
//! Row error policy: a malformed coordinate or empty designator skips that
//! row and records a warning; the rest of the batch continues. Structural
//! CSV failures (bad quoting) abort the whole file, since everything after
//! them is suspect.

use std::num::ParseFloatError;
use std::path::Path;

use pinmap_engine::{BoardSpec, ComponentRecord, InsertOutcome, Registry};

use crate::dialect::{self, FileDialect};
use crate::error::{CentroidError, LoadWarning};

/// Outcome of loading one centroid file.
#[derive(Debug)]
pub struct LoadReport {
    pub registry: Registry,
    pub dialect: FileDialect,
    pub warnings: Vec<LoadWarning>,
}

/// Load a centroid file and classify every row against `board`.
pub fn load(path: &Path, board: &BoardSpec) -> Result<LoadReport, CentroidError> {
    let content = read_file_as_utf8(path)?;
    let file_dialect =
        dialect::detect(content.as_bytes()).map_err(|e| CentroidError::Io(e.to_string()))?;

    let Some(header_row) = file_dialect.header_row else {
        return Err(CentroidError::HeaderNotFound);
    };

    // Skip the preamble; the csv reader takes over at the header row.
    let data = skip_lines(&content, header_row);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let headers = reader.headers().map_err(|e| CentroidError::Csv(e.to_string()))?.clone();
    let designator_idx = column_index(&headers, "Designator")?;
    let layer_idx = column_index(&headers, "Layer")?;
    let x_idx = column_index(&headers, file_dialect.units.x_column())?;
    let y_idx = column_index(&headers, file_dialect.units.y_column())?;

    let factor = file_dialect.units.conversion_factor();
    let mut registry = Registry::new();
    let mut warnings = Vec::new();

    for (row_index, result) in reader.records().enumerate() {
        let row = row_index + 1;
        let record = result.map_err(|e| CentroidError::Csv(e.to_string()))?;

        let designator = record.get(designator_idx).map(str::trim).unwrap_or("");
        if designator.is_empty() {
            warnings.push(LoadWarning::MissingDesignator { row });
            continue;
        }
        let layer = record.get(layer_idx).map(str::trim).unwrap_or("");

        let raw_x = record.get(x_idx).unwrap_or("");
        let x_mm = match normalize_coordinate(raw_x, factor) {
            Ok(v) => v,
            Err(_) => {
                warnings.push(LoadWarning::BadCoordinate {
                    row,
                    column: file_dialect.units.x_column(),
                    value: raw_x.to_string(),
                });
                continue;
            }
        };
        let raw_y = record.get(y_idx).unwrap_or("");
        let y_mm = match normalize_coordinate(raw_y, factor) {
            Ok(v) => v,
            Err(_) => {
                warnings.push(LoadWarning::BadCoordinate {
                    row,
                    column: file_dialect.units.y_column(),
                    value: raw_y.to_string(),
                });
                continue;
            }
        };

        if x_mm < 0.0 || y_mm < 0.0 {
            warnings.push(LoadWarning::NegativeCoordinate {
                row,
                designator: designator.to_string(),
            });
        }

        let component = ComponentRecord::place(board, designator, layer, x_mm, y_mm);
        if registry.insert(component) == InsertOutcome::Duplicate {
            warnings.push(LoadWarning::DuplicateDesignator {
                row,
                designator: designator.to_string(),
            });
        }
    }

    Ok(LoadReport { registry, dialect: file_dialect, warnings })
}

/// Normalize one raw coordinate field into canonical millimeters.
///
/// Empty or whitespace-only text is a tolerant `0.0`, not an error. Unit
/// suffix tokens (`mm`, `mil`) are stripped case-insensitively wherever
/// they appear; the remainder parses with the invariant period-decimal
/// convention and is scaled by `factor`.
pub fn normalize_coordinate(text: &str, factor: f64) -> Result<f64, ParseFloatError> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    let cleaned = strip_unit_tokens(text);
    let value: f64 = cleaned.parse()?;
    Ok(value * factor)
}

/// Remove `mil` and `mm` tokens case-insensitively. `mil` goes first so its
/// leading `m` is never half-eaten by the `mm` pass.
fn strip_unit_tokens(text: &str) -> String {
    let mut out = text.trim().to_string();
    for token in ["mil", "mm"] {
        loop {
            let lower = out.to_ascii_lowercase();
            match lower.find(token) {
                Some(pos) => out.replace_range(pos..pos + token.len(), ""),
                None => break,
            }
        }
    }
    out.trim().to_string()
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252 exports).
fn read_file_as_utf8(path: &Path) -> Result<String, CentroidError> {
    let bytes = std::fs::read(path).map_err(|e| CentroidError::Io(format!("{}: {e}", path.display())))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn skip_lines(content: &str, lines: usize) -> &str {
    let mut rest = content;
    for _ in 0..lines {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, CentroidError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CentroidError::MissingColumn(name.to_string()))
}
