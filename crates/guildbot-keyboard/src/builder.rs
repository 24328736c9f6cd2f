//! Chained construction helpers for keyboards.
//!
//! Building is purely additive: rows are appended to a keyboard and buttons to
//! a row, in call order, and nothing is ever removed or reordered. Every
//! append returns `&mut Self` so calls chain.
//!
//! Button IDs come from a process-wide atomic counter, so concurrent builders
//! interleave one strictly increasing sequence without duplicates. The counter
//! does not survive a process restart.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::action::{Action, ActionType, Permission, PermissionType};
use crate::keyboard::{Button, CustomKeyboard, RenderData, Row};

static NEXT_BUTTON_ID: AtomicU64 = AtomicU64::new(0);

fn next_button_id() -> String {
    (NEXT_BUTTON_ID.fetch_add(1, Ordering::SeqCst) + 1).to_string()
}

/// Resets the process-wide button ID counter, so the next button gets ID "1".
///
/// Meant for test isolation or the start of a fresh session. Resetting while
/// other keyboards are still being built restarts the shared sequence and
/// hands out IDs already in use.
pub fn reset_button_id_counter() {
    NEXT_BUTTON_ID.store(0, Ordering::SeqCst);
}

impl CustomKeyboard {
    /// An empty keyboard with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Row contents are not validated.
    pub fn add_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }
}

impl Row {
    /// An empty row with no buttons.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fully general button constructor.
    ///
    /// Allocates the next button ID and appends. Enum-valued parameters are
    /// stored as given; out-of-range values surface downstream unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn add_button(
        &mut self,
        label: impl Into<String>,
        visited_label: impl Into<String>,
        data: impl Into<String>,
        style: u32,
        action_type: ActionType,
        permission_type: PermissionType,
        reply: bool,
        enter: bool,
        show_channel_list: bool,
    ) -> &mut Self {
        self.buttons.push(Button {
            id: next_button_id(),
            render_data: Some(RenderData {
                label: label.into(),
                visited_label: visited_label.into(),
                style,
            }),
            action: Some(Action {
                kind: action_type,
                permission: Some(Permission::of_kind(permission_type)),
                data: data.into(),
                reply,
                enter,
                at_bot_show_channel_list: show_channel_list,
                ..Action::default()
            }),
        });
        self
    }

    /// Text button anyone can use: mentions the bot and prefills `data`.
    pub fn add_text_button(
        &mut self,
        label: impl Into<String>,
        visited_label: impl Into<String>,
        data: impl Into<String>,
        reply: bool,
        enter: bool,
    ) -> &mut Self {
        self.add_button(
            label,
            visited_label,
            data,
            0,
            ActionType::AT_BOT,
            PermissionType::ALL,
            reply,
            enter,
            false,
        )
    }

    /// Text button restricted to channel managers.
    pub fn add_text_button_admin(
        &mut self,
        label: impl Into<String>,
        visited_label: impl Into<String>,
        data: impl Into<String>,
        reply: bool,
        enter: bool,
    ) -> &mut Self {
        self.add_button(
            label,
            visited_label,
            data,
            0,
            ActionType::AT_BOT,
            PermissionType::MANAGER,
            reply,
            enter,
            false,
        )
    }

    /// Link button anyone can use.
    pub fn add_url_button(
        &mut self,
        label: impl Into<String>,
        visited_label: impl Into<String>,
        url: impl Into<String>,
        reply: bool,
        enter: bool,
    ) -> &mut Self {
        self.add_button(
            label,
            visited_label,
            url,
            0,
            ActionType::URL,
            PermissionType::ALL,
            reply,
            enter,
            false,
        )
    }

    /// Link button restricted to channel managers.
    pub fn add_url_button_admin(
        &mut self,
        label: impl Into<String>,
        visited_label: impl Into<String>,
        url: impl Into<String>,
        reply: bool,
        enter: bool,
    ) -> &mut Self {
        self.add_button(
            label,
            visited_label,
            url,
            0,
            ActionType::URL,
            PermissionType::MANAGER,
            reply,
            enter,
            false,
        )
    }
}
