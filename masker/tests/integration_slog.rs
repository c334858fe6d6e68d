//! Integration tests for the slog adapter.
//!
//! These tests verify that:
//! - `into_masked_json()` produces correctly masked JSON values
//! - The derived `slog::Value` implementation logs the masked copy
//! - Walk and serialization failures degrade to placeholder strings

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use masker::{
    slog::{IntoMaskedJson, MASK_FAILED, SERIALIZE_FAILED},
    Email, MaskError, MaskMapper, Maskable, Mobile, Name, Password,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Unit,
    None,
    // Nested serde values are captured as their JSON representation
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_bool(&mut self, key: slog::Key, val: bool) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Bool(val));
        Ok(())
    }

    fn emit_i64(&mut self, key: slog::Key, val: i64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::I64(val));
        Ok(())
    }

    fn emit_u64(&mut self, key: slog::Key, val: u64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::U64(val));
        Ok(())
    }

    fn emit_f64(&mut self, key: slog::Key, val: f64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::F64(val));
        Ok(())
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Unit);
        Ok(())
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::None);
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

/// Serializes a `slog::Value` under `key` with a throwaway record.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

fn captured_json(serializer: &CapturingSerializer, key: &str) -> JsonValue {
    match serializer.get(key) {
        Some(CapturedValue::Serde(json)) => json,
        other => panic!("expected Serde value for '{key}', got {other:?}"),
    }
}

// ============================================================================
// Basic functionality tests
// ============================================================================

#[derive(Clone, Maskable, Serialize)]
struct User {
    #[mask(Name)]
    name: String,
    #[mask(Email)]
    email: String,
    #[mask(Password)]
    password: String,
    #[mask]
    friend: Option<Box<User>>,
    locale: String,
}

fn user() -> User {
    User {
        name: "ABCD".into(),
        email: "ggw.chang@gmail.com".into(),
        password: "hunter2".into(),
        friend: None,
        locale: "zh-TW".into(),
    }
}

#[test]
fn into_masked_json_masks_fields() {
    let masked = user().into_masked_json();
    assert_eq!(
        masked.as_json(),
        &json!({
            "name": "A**D",
            "email": "ggw****@gmail.com",
            "password": "************",
            "friend": null,
            "locale": "zh-TW"
        })
    );
}

#[test]
fn derived_value_logs_masked_copy() {
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&user(), "user", &mut serializer);

    let json = captured_json(&serializer, "user");
    assert_eq!(json["name"], "A**D");
    assert_eq!(json["password"], "************");
    assert_eq!(json["locale"], "zh-TW");
}

#[test]
fn nested_records_are_masked_when_logged() {
    let mut outer = user();
    let mut friend = user();
    friend.name = "WXYZ".into();
    friend.password = "letmein".into();
    outer.friend = Some(Box::new(friend));

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&outer.into_masked_json(), "user", &mut serializer);

    let json = captured_json(&serializer, "user");
    assert_eq!(json["friend"]["name"], "W**Z");
    assert_eq!(json["friend"]["password"], "************");
    assert!(json["friend"]["friend"].is_null());
}

#[test]
fn original_value_is_untouched_after_logging() {
    let original = user();
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&original, "user", &mut serializer);
    assert_eq!(original.password, "hunter2");
}

#[test]
fn enums_log_their_masked_variant() {
    #[derive(Clone, Maskable, Serialize)]
    enum Contact {
        Phone(#[mask(Mobile)] String),
        Mail {
            #[mask(Email)]
            address: String,
        },
    }

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(
        &Contact::Phone("0987654321".into()),
        "phone",
        &mut serializer,
    );
    serialize_to_capture(
        &Contact::Mail {
            address: "abcdef@x.tw".into(),
        },
        "mail",
        &mut serializer,
    );

    assert_eq!(
        captured_json(&serializer, "phone"),
        json!({ "Phone": "0987***321" })
    );
    assert_eq!(
        captured_json(&serializer, "mail"),
        json!({ "Mail": { "address": "abc****@x.tw" } })
    );
}

// ============================================================================
// Failure placeholders
// ============================================================================

#[test]
fn walk_failure_logs_placeholder() {
    #[derive(Clone, Debug, Serialize)]
    struct Sealed {
        secret: String,
    }

    impl Maskable for Sealed {
        fn mask_with<M: MaskMapper>(&self, _mapper: &M) -> Result<Self, MaskError> {
            Err(MaskError::rejected("Sealed", "never logged"))
        }
    }

    #[derive(Clone, Maskable, Serialize)]
    struct Envelope {
        #[mask]
        inner: Sealed,
    }

    let envelope = Envelope {
        inner: Sealed {
            secret: "hunter2".into(),
        },
    };

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&envelope, "envelope", &mut serializer);

    assert_eq!(
        captured_json(&serializer, "envelope"),
        JsonValue::String(MASK_FAILED.to_string())
    );
}

#[test]
fn serialization_failure_logs_placeholder() {
    #[derive(Clone, Maskable, Serialize)]
    struct Index {
        #[mask(Name)]
        owner: String,
        // serde_json rejects non-string map keys.
        cells: HashMap<(u8, u8), String>,
    }

    let index = Index {
        owner: "ABCD".into(),
        cells: HashMap::from([((0, 0), "origin".to_string())]),
    };

    assert_eq!(
        index.into_masked_json().as_json(),
        &JsonValue::String(SERIALIZE_FAILED.to_string())
    );
}
