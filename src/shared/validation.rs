//! Validation Utilities
//!
//! Field-keyed error maps built either from `validator` output (client-side
//! form checks) or from the API's error payloads, which key each field to an
//! array of messages.

use std::collections::BTreeMap;

use serde_json::Value;
use validator::ValidationErrors;

use crate::i18n::Translator;

/// Field name -> the one message shown next to that field.
pub type FieldErrors = BTreeMap<String, String>;

/// Convert validator errors into a field map, first message per field.
pub fn validation_error(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

/// Like [`validation_error`], but each error's `code` is treated as a
/// translation key and its message as the fallback text.
pub fn localized_errors(errors: &ValidationErrors, i18n: &Translator) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let fallback = e.message.as_deref();
                (field.to_string(), i18n.t(&e.code, fallback))
            })
        })
        .collect()
}

/// Keys that carry a general message rather than a field error.
const MESSAGE_KEYS: [&str; 3] = ["detail", "error", "message"];

/// Extract per-field messages from an API error body.
///
/// Arrays contribute their first string, plain strings are taken as is, and
/// nested objects are flattened to `parent.child` keys. General message keys
/// (`detail`, `error`, `message`) are left to [`server_message`]. Anything
/// that is not an object yields an empty map.
pub fn extract_field_errors(body: &Value) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let Some(object) = body.as_object() else {
        return errors;
    };

    for (key, value) in object {
        if MESSAGE_KEYS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Array(_) | Value::String(_) => {
                if let Some(message) = first_message(value) {
                    errors.insert(key.clone(), message);
                }
            }
            Value::Object(nested) => {
                for (sub_key, sub_value) in nested {
                    if let Some(message) = first_message(sub_value) {
                        errors.insert(format!("{}.{}", key, sub_key), message);
                    }
                }
            }
            _ => {}
        }
    }

    errors
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// The human-readable message a failed response carries, if any.
pub fn server_message(body: &Value) -> Option<String> {
    MESSAGE_KEYS
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}
