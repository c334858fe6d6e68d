//! Policy-table masking for `serde_json` records.
//!
//! When a record's shape is only known at runtime, the per-field categories
//! come from a [`MaskPolicy`] instead of `#[mask]` attributes. The walk
//! follows the same rules as the derived walkers: leaf fields are masked,
//! `struct` fields are walked recursively, and everything else is copied.
//!
//! Policies deserialize from the tag form used by [`MaskKind`]:
//!
//! ```rust
//! use masker::MaskPolicy;
//! use serde_json::json;
//!
//! let policy: MaskPolicy = serde_json::from_value(json!({
//!     "fields": { "name": "name", "email": "email", "friend": "struct" }
//! }))
//! .unwrap();
//!
//! let masked = policy
//!     .apply(&json!({
//!         "name": "ABCD",
//!         "email": "ggw.chang@gmail.com",
//!         "friend": { "name": "WXYZ", "email": null, "friend": null }
//!     }))
//!     .unwrap();
//!
//! assert_eq!(masked["name"], "A**D");
//! assert_eq!(masked["friend"]["name"], "W**Z");
//! assert!(masked["friend"]["friend"].is_null());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{category::MaskKind, error::MaskError};

/// Per-field masking policy for one record shape.
///
/// `fields` maps a field name to its category. A field tagged
/// [`MaskKind::Struct`] is walked with its entry in `nested`, or with this
/// same policy when it has none (self-referential records). Entries for
/// fields missing from a record are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskPolicy {
    #[serde(default)]
    fields: BTreeMap<String, MaskKind>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    nested: BTreeMap<String, MaskPolicy>,
}

impl MaskPolicy {
    /// Creates an empty policy: every field is copied unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags `field` with `kind`.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>, kind: MaskKind) -> Self {
        self.fields.insert(field.into(), kind);
        self
    }

    /// Tags `field` as a nested record walked with `policy`.
    #[must_use]
    pub fn nested(mut self, field: impl Into<String>, policy: MaskPolicy) -> Self {
        let field = field.into();
        self.fields.insert(field.clone(), MaskKind::Struct);
        self.nested.insert(field, policy);
        self
    }

    /// Returns the category declared for `field`, if any.
    #[must_use]
    pub fn kind_of(&self, field: &str) -> Option<MaskKind> {
        self.fields.get(field).copied()
    }

    /// Returns a masked copy of `record`.
    ///
    /// `record` must be a JSON object. Fields are processed in document order
    /// and the first error aborts the whole walk.
    pub fn apply(&self, record: &Value) -> Result<Value, MaskError> {
        match record {
            Value::Object(fields) => self.apply_object(fields).map(Value::Object),
            other => Err(MaskError::UnsupportedRecord {
                found: shape(other),
            }),
        }
    }

    fn apply_object(&self, fields: &Map<String, Value>) -> Result<Map<String, Value>, MaskError> {
        let mut masked = Map::with_capacity(fields.len());
        for (field, value) in fields {
            let value = match self.kind_of(field) {
                None => value.clone(),
                Some(MaskKind::Struct) => self.apply_nested(field, value)?,
                Some(kind) => apply_leaf(kind, field, value)?,
            };
            masked.insert(field.clone(), value);
        }
        Ok(masked)
    }

    fn apply_nested(&self, field: &str, value: &Value) -> Result<Value, MaskError> {
        let policy = self.nested.get(field).unwrap_or(self);
        match value {
            Value::Null => Ok(Value::Null),
            Value::Object(fields) => policy.apply_object(fields).map(Value::Object),
            other => Err(MaskError::UnsupportedField {
                field: field.to_string(),
                expected: "an object",
                found: shape(other),
            }),
        }
    }
}

fn apply_leaf(kind: MaskKind, field: &str, value: &Value) -> Result<Value, MaskError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::String(text) => Ok(Value::String(kind.apply_to(text).unwrap_or_default())),
        other => Err(MaskError::UnsupportedField {
            field: field.to_string(),
            expected: "a string",
            found: shape(other),
        }),
    }
}

fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
