//! Message components: action rows, buttons, select menus, and text inputs.
//!
//! Components are referenced by interactions and callbacks but are not
//! themselves a discriminated family in this crate. A single flat
//! [`Component`] carries every field any component kind may have, tagged by
//! a typed [`ComponentType`]. Action rows, the containers that appear at the
//! top level of messages and modals, get their own [`ActionRow`] shape.

use crate::types::{
    id::{marker::EmojiMarker, Id},
    util::MustBeU8,
};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    TextInput = 4,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
}

impl TryFrom<u64> for ComponentType {
    type Error = u64;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ActionRow,
            2 => Self::Button,
            3 => Self::StringSelect,
            4 => Self::TextInput,
            5 => Self::UserSelect,
            6 => Self::RoleSelect,
            7 => Self::MentionableSelect,
            8 => Self::ChannelSelect,
            other => return Err(other),
        })
    }
}

/// Row of components, the top-level container of messages and modals.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActionRow {
    pub components: Vec<Component>,
    #[serde(rename = "type")]
    pub kind: MustBeU8<1>,
}

/// Any component.
///
/// Which optional fields are meaningful depends on `kind`; for example only
/// buttons have a `style` and `url`, and only text inputs submitted through
/// a modal carry a `value`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Component {
    /// Nested components, for action rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectMenuOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Button style (1 primary to 5 link) or text input style (1 short,
    /// 2 paragraph).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectMenuOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComponentEmoji {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<EmojiMarker>>,
    /// Unicode emoji or custom emoji name; null for deleted custom emojis
    /// and often left out when only `id` is sent.
    #[serde(
        default,
        deserialize_with = "crate::types::util::nullable::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::{ActionRow, Component, ComponentType};
    use serde_json::json;

    #[test]
    fn submitted_text_input_row() {
        let row: ActionRow = serde_json::from_value(json!({
            "type": 1,
            "components": [{ "type": 4, "custom_id": "reason", "value": "spam" }],
        }))
        .unwrap();

        let input = &row.components[0];
        assert_eq!(input.kind, ComponentType::TextInput);
        assert_eq!(input.value.as_deref(), Some("spam"));
        assert!(input.label.is_none());
    }

    #[test]
    fn row_must_be_type_one() {
        let result = serde_json::from_value::<ActionRow>(json!({
            "type": 2,
            "components": [],
        }));

        assert!(result.is_err());
    }

    #[test]
    fn button_round_trip() {
        let value = json!({
            "type": 1,
            "components": [{
                "type": 2,
                "custom_id": "confirm",
                "label": "Confirm",
                "style": 3,
                "emoji": { "name": "✅" },
            }],
        });

        let row: ActionRow = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&row).unwrap(), value);
    }

    #[test]
    fn emoji_name_absent_or_null() {
        for emoji in [json!({ "id": "5" }), json!({ "id": "5", "name": null })] {
            let value = json!({ "type": 2, "custom_id": "react", "emoji": emoji });

            let component: Component = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(serde_json::to_value(&component).unwrap(), value);
        }
    }
}
