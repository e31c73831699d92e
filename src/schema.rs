//! Structural validation of the posts payload.
//!
//! The HTTP layer hands back an arbitrary [`serde_json::Value`].  Nothing about
//! its shape is guaranteed, so this module checks it against the expected
//! schema before anything else touches it:
//!
//! ```text
//! [ { id: integer, userId: integer, title: string, body: string }, ... ]
//! ```
//!
//! Validation is open: extra fields on a record are ignored.  Every mismatch
//! is collected so the error can describe all of them, but the
//! [`Display`](std::fmt::Display) output leads with the first one.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::post::RawPost;

/// Primitive type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Integer,
    String,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::String => "string",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::String => value.is_string(),
        }
    }
}

/// Required fields of one post record, in the order they are checked.
const POST_FIELDS: [(&str, FieldKind); 4] = [
    ("id", FieldKind::Integer),
    ("userId", FieldKind::Integer),
    ("title", FieldKind::String),
    ("body", FieldKind::String),
];

/// A single schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the offending value, e.g. `[3].userId`.  Empty for the
    /// top-level value.
    pub path: String,
    pub expected: &'static str,
    /// What was found instead (`missing`, `string`, `float`, ...).
    pub received: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "expected {}, received {}", self.expected, self.received)
        } else {
            write!(
                f,
                "{}: expected {}, received {}",
                self.path, self.expected, self.received
            )
        }
    }
}

/// The payload did not match the posts schema.
///
/// Always holds at least one [`Issue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issues.split_first() {
            Some((first, [])) => write!(f, "invalid response: {first}"),
            Some((first, rest)) => write!(
                f,
                "invalid response: {first} (and {} more issue{})",
                rest.len(),
                if rest.len() == 1 { "" } else { "s" }
            ),
            None => write!(f, "invalid response"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check `value` against the posts schema and return the typed records.
pub fn validate_posts(value: &Value) -> Result<Vec<RawPost>, ValidationError> {
    let Some(elements) = value.as_array() else {
        return Err(ValidationError::new(vec![Issue {
            path: String::new(),
            expected: "array",
            received: describe(value).to_string(),
        }]));
    };

    let mut issues = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        match element.as_object() {
            Some(record) => check_record(index, record, &mut issues),
            None => issues.push(Issue {
                path: format!("[{index}]"),
                expected: "object",
                received: describe(element).to_string(),
            }),
        }
    }

    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    // The structural pass above guarantees this succeeds; map the error
    // anyway rather than panic on a serde mismatch.
    Vec::<RawPost>::deserialize(value).map_err(|e| {
        ValidationError::new(vec![Issue {
            path: String::new(),
            expected: "post records",
            received: e.to_string(),
        }])
    })
}

fn check_record(index: usize, record: &Map<String, Value>, issues: &mut Vec<Issue>) {
    for (field, kind) in POST_FIELDS {
        let received = match record.get(field) {
            None => "missing",
            Some(v) if kind.accepts(v) => continue,
            Some(v) => describe(v),
        };
        issues.push(Issue {
            path: format!("[{index}].{field}"),
            expected: kind.name(),
            received: received.to_string(),
        });
    }
}

/// Short type name of a JSON value, for error messages.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        // u64 beyond i64::MAX
        Value::Number(n) if n.is_u64() => "out-of-range integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
