//! Utilities for representing and decoding data from Discord's API.
//!
//! The family decoders in [`application::interaction`] and
//! [`http::interaction`] buffer a payload into a [`serde_json::Value`],
//! inspect its discriminants, and then hand the object to the narrowed
//! shape. The helpers here keep those steps terse and turn every failure
//! into a [`DecodeError`].
//!
//! [`application::interaction`]: crate::types::application::interaction
//! [`http::interaction`]: crate::types::http::interaction

pub mod datetime;
pub mod mustbe;

pub(crate) mod nullable;

pub use self::{datetime::Timestamp, mustbe::MustBeU8};

use crate::types::error::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON object as buffered by the decoders.
pub(crate) type JsonObject = Map<String, Value>;

/// Extension trait on [`serde_json::Value`] that deserializes into a typed
/// shape, reporting failures as [`DecodeError`]s of kind
/// [`ShapeMismatch`].
///
/// [`ShapeMismatch`]: crate::types::error::DecodeErrorType::ShapeMismatch
pub(crate) trait ValueExt: Sized {
    /// Consume this value and attempt to deserialize it into `T`.
    fn deserialize_into<T: DeserializeOwned>(self) -> Result<T, DecodeError>;
}

impl ValueExt for Value {
    fn deserialize_into<T: DeserializeOwned>(self) -> Result<T, DecodeError> {
        serde_json::from_value(self).map_err(DecodeError::shape_mismatch)
    }
}

impl ValueExt for JsonObject {
    fn deserialize_into<T: DeserializeOwned>(self) -> Result<T, DecodeError> {
        Value::Object(self).deserialize_into()
    }
}

/// Unwrap a JSON object, failing for any other kind of value.
pub(crate) fn into_object(value: Value) -> Result<JsonObject, DecodeError> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(DecodeError::NOT_AN_OBJECT),
    }
}

/// Whether a field is present with a non-null value.
pub(crate) fn has_field(object: &JsonObject, field: &str) -> bool {
    object.get(field).is_some_and(|value| !value.is_null())
}

/// Read an integer discriminant without consuming it.
pub(crate) fn discriminant(object: &JsonObject, field: &'static str) -> Result<u64, DecodeError> {
    let value = object
        .get(field)
        .filter(|value| !value.is_null())
        .ok_or_else(|| DecodeError::missing_field(field))?;

    value
        .as_u64()
        .ok_or_else(|| DecodeError::invalid_discriminant(field))
}

/// Remove a required field from the object.
pub(crate) fn take_field(object: &mut JsonObject, field: &'static str) -> Result<Value, DecodeError> {
    object
        .remove(field)
        .filter(|value| !value.is_null())
        .ok_or_else(|| DecodeError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::{discriminant, has_field, into_object, take_field, ValueExt};
    use crate::types::error::DecodeErrorType;
    use serde_json::json;

    #[test]
    fn discriminant_reads_integer() {
        let object = into_object(json!({ "type": 3 })).unwrap();
        assert_eq!(discriminant(&object, "type").unwrap(), 3);
    }

    #[test]
    fn discriminant_missing() {
        let object = into_object(json!({ "type": null })).unwrap();
        let err = discriminant(&object, "type").unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorType::MissingField { field: "type" }
        ));
    }

    #[test]
    fn discriminant_not_an_integer() {
        let object = into_object(json!({ "type": "2" })).unwrap();
        let err = discriminant(&object, "type").unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorType::InvalidDiscriminant { field: "type" }
        ));
    }

    #[test]
    fn into_object_rejects_arrays() {
        let err = into_object(json!([1, 2])).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorType::NotAnObject));
    }

    #[test]
    fn null_fields_count_as_absent() {
        let mut object = into_object(json!({ "user": null, "member": {} })).unwrap();
        assert!(!has_field(&object, "user"));
        assert!(has_field(&object, "member"));
        assert!(take_field(&mut object, "user").is_err());
        assert!(take_field(&mut object, "member").is_ok());
    }

    #[test]
    fn deserialize_into_reports_shape_mismatch() {
        let err = json!({ "a": 1 }).deserialize_into::<Vec<u8>>().unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorType::ShapeMismatch));
    }
}
