//! JSON rendering for parsed résumés.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::ParsedResume;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a parsed résumé to JSON.
pub fn to_json(resume: &ParsedResume, format: JsonFormat) -> Result<String> {
    to_json_value(resume, format)
}

/// Convert any serializable pipeline value (sections, atoms) to JSON.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}
