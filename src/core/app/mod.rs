//! Runtime application state
//!
//! [`App`] is the single owner of all mutable session state. The event
//! loop and renderer receive it by reference; nothing else holds shared
//! handles to the flags, so the cooperative single-threaded model cannot
//! race on them.

mod composer;
mod conversation;
mod picker;
mod session;
mod sidebar;
#[cfg(test)]
mod tests;
mod ui_state;

use std::sync::Arc;

pub use composer::{
    is_supported_attachment, AspectRatio, Attachment, ComposerState, OutgoingDraft,
};
pub use conversation::{schedule_copy_reset, ConversationController};
pub use picker::PickerController;
pub use session::SessionContext;
pub use sidebar::SidebarState;
pub use ui_state::{ShellEvent, UiMode, UiState};

use crate::utils::clipboard::Clipboard;
use crate::utils::haptics::HapticEngine;

pub struct App {
    pub session: SessionContext,
    pub ui: UiState,
    pub picker: PickerController,
}

impl App {
    pub fn new(
        selected_model: impl Into<String>,
        incognito_mode: bool,
        haptics: HapticEngine,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            session: SessionContext::new(selected_model, incognito_mode, haptics, clipboard),
            ui: UiState::new(),
            picker: PickerController::new(),
        }
    }

    /// Returns a controller for conversation operations: draft submission
    /// and the per-message copy affordance.
    pub fn conversation(&mut self) -> ConversationController<'_> {
        ConversationController::new(&mut self.session, &mut self.ui)
    }
}
