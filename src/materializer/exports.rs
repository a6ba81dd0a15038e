//! # Export Lines
//!
//! Renders a JSON secret document into shell `export` statements.
//!
//! Values are wrapped in single quotes without escaping. A value containing `'`
//! produces a line the shell will not parse as intended; producers must avoid
//! single quotes in secret values.

use serde_json::error::Category;
use serde_json::Value;

use crate::error::SecretDocumentError;

/// A shell-sourceable `export KEY='VALUE'` statement
#[derive(Clone, PartialEq, Eq)]
pub struct ExportLine(String);

impl ExportLine {
    pub fn new(key: &str, value: &str) -> Self {
        Self(format!("export {key}='{value}'"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Lines carry secret values
impl std::fmt::Debug for ExportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = self
            .0
            .strip_prefix("export ")
            .and_then(|rest| rest.split_once('='))
            .map_or("?", |(key, _)| key);
        write!(f, "ExportLine({key}=<redacted>)")
    }
}

impl Drop for ExportLine {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.0);
    }
}

/// Render a flat JSON object of strings into export lines, in document order
///
/// # Errors
///
/// Returns a [`SecretDocumentError`] when the text is not a JSON object or any
/// value is not a string. No lines are produced in that case.
pub fn render_exports(text: &str) -> Result<Vec<ExportLine>, SecretDocumentError> {
    // serde_json messages quote offending scalars, keep only the position
    let document: Value = serde_json::from_str(text).map_err(|e| SecretDocumentError::Malformed {
        category: category_name(e.classify()),
        line: e.line(),
        column: e.column(),
    })?;

    let document = match document {
        Value::Object(map) => map,
        other => {
            return Err(SecretDocumentError::NotAnObject {
                found: json_type(&other),
            })
        }
    };

    let mut pairs = Vec::with_capacity(document.len());
    for (key, value) in &document {
        match value {
            Value::String(value) => pairs.push(ExportLine::new(key, value)),
            other => {
                return Err(SecretDocumentError::NonStringValue {
                    key: key.clone(),
                    found: json_type(other),
                })
            }
        }
    }

    Ok(pairs)
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
