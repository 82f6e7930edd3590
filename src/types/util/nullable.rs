//! Deserializers for fields Discord may send as `null`.
//!
//! Serde fills a missing `Option` field with `None`, which merges "absent"
//! and "null". Fields that are always sent use [`required`] so that a
//! missing key is an error. Fields that may be missing or null use
//! [`optional`] on an `Option<Option<T>>`, where the outer `None` is absent
//! and `Some(None)` is null.

use serde::{Deserialize, Deserializer};

/// Field that must be present but may be `null`.
pub(crate) fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

/// Field that may be absent, `null`, or set. Pair with `default` and
/// `skip_serializing_if = "Option::is_none"`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq, Serialize)]
    struct Fields {
        #[serde(deserialize_with = "super::required")]
        always: Option<u8>,
        #[serde(
            default,
            deserialize_with = "super::optional",
            skip_serializing_if = "Option::is_none"
        )]
        sometimes: Option<Option<u8>>,
    }

    #[test]
    fn required_rejects_missing_key() {
        assert!(serde_json::from_value::<Fields>(json!({})).is_err());
    }

    #[test]
    fn optional_keeps_three_states() {
        for (value, sometimes) in [
            (json!({ "always": null }), None),
            (json!({ "always": 1, "sometimes": null }), Some(None)),
            (json!({ "always": 1, "sometimes": 2 }), Some(Some(2))),
        ] {
            let fields: Fields = serde_json::from_value(value.clone()).unwrap();

            assert_eq!(fields.sometimes, sometimes);
            assert_eq!(serde_json::to_value(&fields).unwrap(), value);
        }
    }
}
