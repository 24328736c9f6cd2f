//! Button action and permission types.
//!
//! `ActionType` and `PermissionType` are transparent wrappers over the wire
//! integers rather than closed enums: the platform owns the value space, so
//! unknown values are stored and serialized unchanged instead of being
//! rejected here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happens when a button is clicked.
///
/// Known values are exposed as associated constants; any other value passes
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionType(pub u32);

impl ActionType {
    /// Open `data` as an http link or deep-link schema.
    pub const URL: Self = Self(0);
    /// POST `data` to the bot's interaction callback endpoint.
    pub const CALLBACK: Self = Self(1);
    /// Mention the bot and prefill `data` into the user's input box.
    pub const AT_BOT: Self = Self(2);

    pub fn is_default(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who may click a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionType(pub u32);

impl PermissionType {
    /// Only the users listed in [`Permission::specify_user_ids`].
    pub const SPECIFY_USER_IDS: Self = Self(0);
    /// Only members with management rights in the channel.
    pub const MANAGER: Self = Self(1);
    /// Anyone.
    pub const ALL: Self = Self(2);
    /// Only members holding a role listed in [`Permission::specify_role_ids`].
    pub const SPECIFY_ROLE_IDS: Self = Self(3);

    pub fn is_default(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PermissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permission gate for a button's action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permission {
    #[serde(rename = "type", default, skip_serializing_if = "PermissionType::is_default")]
    pub kind: PermissionType,
    /// Role IDs allowed to click, for [`PermissionType::SPECIFY_ROLE_IDS`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specify_role_ids: Vec<String>,
    /// User IDs allowed to click, for [`PermissionType::SPECIFY_USER_IDS`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specify_user_ids: Vec<String>,
}

impl Permission {
    /// Permission carrying only a type, no ID lists.
    pub fn of_kind(kind: PermissionType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// Click behavior of a button.
///
/// The meaning of `data` depends on `kind`: a URL for [`ActionType::URL`], a
/// callback payload for [`ActionType::CALLBACK`], prefill text for
/// [`ActionType::AT_BOT`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type", default, skip_serializing_if = "ActionType::is_default")]
    pub kind: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,
    /// Tip shown to users the permission gate excludes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unsupport_tips: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reply: bool,
    /// Auto-submit the prefilled text instead of leaving it in the input box.
    #[serde(default, skip_serializing_if = "is_false")]
    pub enter: bool,
    /// Show a sub-channel selector before the at-bot prefill.
    #[serde(default, skip_serializing_if = "is_false")]
    pub at_bot_show_channel_list: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}
