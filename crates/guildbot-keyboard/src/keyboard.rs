//! Wire-shape structs for the message keyboard block.
//!
//! Field names and omit-if-default behavior match the platform's JSON
//! contract: empty strings, empty lists, false flags, zero integers, and
//! absent nested structs are all elided, so a freshly constructed keyboard
//! serializes to `{}`.

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Keyboard envelope attached to an outgoing message.
///
/// Carries either the ID of a pre-registered keyboard template or inline
/// [`CustomKeyboard`] content, never both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageKeyboard {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CustomKeyboard>,
}

impl MessageKeyboard {
    /// Envelope referencing a pre-registered keyboard template.
    pub fn from_template(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: None,
        }
    }

    /// Envelope carrying inline keyboard content.
    pub fn from_content(keyboard: CustomKeyboard) -> Self {
        Self {
            id: String::new(),
            content: Some(keyboard),
        }
    }
}

/// Ordered rows of buttons. Append-only: rows keep their insertion order and
/// are never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomKeyboard {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Row>,
}

/// One horizontal line of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// A single clickable control.
///
/// The ID is allocated from a process-wide counter at construction time and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Button {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_data: Option<RenderData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

/// How a button is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Label shown after the button has been clicked.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub visited_label: String,
    /// 0 = neutral outline, 1 = accent outline.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub style: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}
