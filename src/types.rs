#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::Path, str::FromStr};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Read-only view of a learner's submitted artifact.
///
/// Questions only ever look values up by name; how those names get populated
/// is up to whoever produced the submission.
pub trait Submission {
    /// Returns the value bound to `name`, or `None` if it was never declared.
    fn get(&self, name: &str) -> Option<&Value>;
}

/// A submission backed by a JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonSubmission {
    /// Declared names and their values.
    values: Map<String, Value>,
}

impl JsonSubmission {
    /// Wraps an existing map.
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Reads and parses a submission file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read submission {}", path.display()))?;
        source
            .parse::<Self>()
            .with_context(|| format!("Could not parse {}", path.display()))
    }

    /// Names declared by this submission.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl FromStr for JsonSubmission {
    type Err = anyhow::Error;

    /// Parses a JSON document whose top level must be an object.
    fn from_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).context("Submission is not valid JSON")?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => bail!("Submission must be a JSON object, found: {}", kind_of(&other)),
        }
    }
}

impl Submission for JsonSubmission {
    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Stand-in for a submission that is missing or could not be loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySubmission;

impl Submission for EmptySubmission {
    fn get(&self, _name: &str) -> Option<&Value> {
        None
    }
}

/// Human-readable JSON type name, used in precondition messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
