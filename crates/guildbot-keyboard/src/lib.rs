//! Interactive message keyboard types and builders for guild bot messages.
//!
//! A keyboard is an ordered block of button rows attached to an outgoing chat
//! message. This crate models the wire shape the platform consumes
//! ([`MessageKeyboard`] down to [`Permission`]) and provides chained append
//! helpers with sensible defaults for the common button kinds.
//!
//! Zero infrastructure dependencies -- only serde. Transport, rendering, and
//! platform-side validation live in the surrounding messaging layer.

pub mod action;
pub mod builder;
pub mod keyboard;

pub use action::{Action, ActionType, Permission, PermissionType};
pub use builder::reset_button_id_counter;
pub use keyboard::{Button, CustomKeyboard, MessageKeyboard, RenderData, Row};
