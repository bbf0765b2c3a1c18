use std::sync::Arc;

use crate::core::models::{find_model, AiModel};
use crate::utils::clipboard::Clipboard;
use crate::utils::haptics::HapticEngine;

/// Top-level session flags and host capability handles. Owned by [`super::App`];
/// child views receive read access and mutate only through these methods,
/// never through shared globals.
pub struct SessionContext {
    pub selected_model: String,
    pub incognito_mode: bool,
    pub sidebar_open: bool,
    pub haptics: HapticEngine,
    pub clipboard: Arc<dyn Clipboard>,
}

impl SessionContext {
    pub fn new(
        selected_model: impl Into<String>,
        incognito_mode: bool,
        haptics: HapticEngine,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            selected_model: selected_model.into(),
            incognito_mode,
            sidebar_open: true,
            haptics,
            clipboard,
        }
    }

    /// Resolve the selected model against the catalog. Always succeeds:
    /// ids that no longer match a catalog entry resolve to the first one.
    pub fn current_model(&self) -> AiModel {
        find_model(&self.selected_model)
    }

    pub fn set_model(&mut self, id: impl Into<String>) {
        self.selected_model = id.into();
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn toggle_incognito(&mut self) -> bool {
        self.incognito_mode = !self.incognito_mode;
        self.incognito_mode
    }
}
