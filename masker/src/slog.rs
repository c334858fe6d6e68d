//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`Maskable`] with `slog` by providing a `slog::Value`
//! that serializes the masked copy of a record as structured JSON via
//! `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from `Maskable::masked()`,
//!   never from the original value.
//! - Avoiding fallible logging APIs: masking and serialization failures are
//!   represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which fields are sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::walk::Maskable;

/// Placeholder logged when the record refused to be masked.
pub const MASK_FAILED: &str = "Failed to mask value";

/// Placeholder logged when the masked record could not be turned into JSON.
pub const SERIALIZE_FAILED: &str = "Failed to serialize masked value";

/// A `slog::Value` that emits an owned masked payload as structured JSON.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// Returns the JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts records into a `slog::Value` that logs their masked form as JSON.
///
/// ## Example
/// ```ignore
/// use masker::slog::IntoMaskedJson;
///
/// info!(logger, "signup"; "user" => user.into_masked_json());
/// ```
pub trait IntoMaskedJson: Maskable + Serialize {
    /// Masks `self` and captures the result as JSON.
    ///
    /// The original value is never serialized. If masking fails the payload is
    /// the string [`MASK_FAILED`]; if serialization fails it is
    /// [`SERIALIZE_FAILED`].
    fn into_masked_json(&self) -> MaskedJson {
        let json_value = match self.masked() {
            Ok(masked) => serde_json::to_value(masked)
                .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILED.to_string())),
            Err(_) => JsonValue::String(MASK_FAILED.to_string()),
        };
        MaskedJson::new(json_value)
    }
}

impl<T> IntoMaskedJson for T where T: Maskable + Serialize {}
