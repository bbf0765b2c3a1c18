use std::collections::{HashMap, VecDeque};

use tokio_util::sync::CancellationToken;

use crate::core::app::composer::ComposerState;
use crate::core::app::sidebar::SidebarState;
use crate::core::message::{Message, Role};
use crate::ui::layout::Viewport;

/// Current input mode of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Default typing mode for composing a message.
    Typing,

    /// Editing the sidebar chat search query.
    ChatSearch,

    /// Prompting for a file path to attach to the draft.
    AttachPrompt { input: String },
}

/// Timer-driven events delivered back into the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The copied indicator for a message has run its 2 s lifetime.
    CopyExpired { message_id: String },
}

pub struct UiState {
    pub messages: VecDeque<Message>,
    pub composer: ComposerState,
    pub sidebar: SidebarState,
    pub mode: UiMode,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    pub viewport: Viewport,
    pub status: Option<String>,
    pub exit_requested: bool,
    next_message_id: u64,
    // Active copied indicators, each with the cancellation handle of its
    // pending revert task. Re-copying a message replaces (and cancels) the
    // stale task.
    copied: HashMap<String, CancellationToken>,
}

impl UiState {
    pub fn new() -> Self {
        let mut state = Self {
            messages: VecDeque::new(),
            composer: ComposerState::new(),
            sidebar: SidebarState::new(),
            mode: UiMode::Typing,
            scroll_offset: 0,
            auto_scroll: true,
            viewport: Viewport::from_cell_grid(80, 24),
            status: None,
            exit_requested: false,
            next_message_id: 0,
            copied: HashMap::new(),
        };
        let id = state.next_id();
        state.messages.push_back(Message::system(
            id,
            "Welcome to OmniDev v4.0! I'm your multimodal AI assistant. \
             How can I help you today?",
        ));
        state
    }

    pub fn next_id(&mut self) -> String {
        self.next_message_id += 1;
        format!("msg-{}", self.next_message_id)
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push_back(message);
    }

    /// Welcome screen is shown while only the seeded greeting exists.
    pub fn welcome_active(&self) -> bool {
        self.messages.len() == 1
            && self
                .messages
                .front()
                .map(|m| m.role == Role::System)
                .unwrap_or(false)
    }

    pub fn latest_assistant_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role.is_assistant())
    }

    pub fn is_copied(&self, message_id: &str) -> bool {
        self.copied.contains_key(message_id)
    }

    /// Mark a message as copied and hand back the cancellation token its
    /// revert task must observe. Any stale revert task for the same
    /// message is cancelled first.
    pub fn mark_copied(&mut self, message_id: &str) -> CancellationToken {
        if let Some(stale) = self.copied.remove(message_id) {
            stale.cancel();
        }
        let token = CancellationToken::new();
        self.copied.insert(message_id.to_string(), token.clone());
        token
    }

    pub fn clear_copied(&mut self, message_id: &str) {
        self.copied.remove(message_id);
    }

    /// Cancel every pending revert task, used on teardown.
    pub fn cancel_copy_timers(&mut self) {
        for (_, token) in self.copied.drain() {
            token.cancel();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16, max_offset: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max_offset);
        if self.scroll_offset >= max_offset {
            self.auto_scroll = true;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_seeds_the_greeting() {
        let state = UiState::new();
        assert!(state.welcome_active());
        let greeting = state.messages.front().unwrap();
        assert_eq!(greeting.role, Role::System);
        assert!(greeting.content.starts_with("Welcome to OmniDev"));
    }

    #[test]
    fn message_ids_are_unique_and_sequential() {
        let mut state = UiState::new();
        let a = state.next_id();
        let b = state.next_id();
        assert_ne!(a, b);
        assert_eq!(b, "msg-3");
    }

    #[test]
    fn welcome_screen_retires_after_first_user_message() {
        let mut state = UiState::new();
        let id = state.next_id();
        state.push_message(Message::user(id, "hi"));
        assert!(!state.welcome_active());
    }

    #[test]
    fn recopying_cancels_the_stale_revert_task() {
        let mut state = UiState::new();
        let first = state.mark_copied("msg-1");
        assert!(state.is_copied("msg-1"));

        let second = state.mark_copied("msg-1");
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(state.is_copied("msg-1"));
    }

    #[test]
    fn clearing_the_flag_removes_the_entry() {
        let mut state = UiState::new();
        state.mark_copied("msg-1");
        state.clear_copied("msg-1");
        assert!(!state.is_copied("msg-1"));
    }
}
