use crate::core::app::session::SessionContext;
use crate::core::models::load_builtin_models;
use crate::ui::picker::{PickerItem, PickerState};

/// Modal model picker over the static catalog. The catalog only offers
/// valid ids, so applying a selection needs no validation error path.
#[derive(Default)]
pub struct PickerController {
    state: Option<PickerState>,
}

impl PickerController {
    pub fn new() -> Self {
        Self { state: None }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&PickerState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut PickerState> {
        self.state.as_mut()
    }

    pub fn open_model_picker(&mut self, session: &SessionContext) {
        let current = session.current_model();
        let items: Vec<PickerItem> = load_builtin_models()
            .into_iter()
            .map(|m| PickerItem {
                label: format!("{} {} — {}", m.icon, m.name, m.provider),
                detail: Some(format!("{} [{}]", m.description, m.capabilities.join(", "))),
                id: m.id,
            })
            .collect();
        let selected = items.iter().position(|i| i.id == current.id).unwrap_or(0);
        self.state = Some(PickerState::new("SELECT MODEL", items, selected));
    }

    pub fn close(&mut self) {
        self.state = None;
    }

    /// Apply the highlighted model to the session and close the panel.
    pub fn apply_selection(&mut self, session: &mut SessionContext) -> Option<String> {
        let id = self.state.as_ref()?.selected_id()?.to_string();
        session.set_model(id.clone());
        self.close();
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::create_test_session;

    #[test]
    fn opening_preselects_the_current_model() {
        let session = create_test_session("claude-3-opus");
        let mut picker = PickerController::new();
        picker.open_model_picker(&session);
        assert!(picker.is_open());
        assert_eq!(picker.state().unwrap().selected_id(), Some("claude-3-opus"));
    }

    #[test]
    fn unknown_current_model_preselects_the_fallback() {
        let session = create_test_session("decommissioned-model");
        let mut picker = PickerController::new();
        picker.open_model_picker(&session);
        assert_eq!(picker.state().unwrap().selected_id(), Some("gpt-4"));
    }

    #[test]
    fn applying_a_selection_updates_the_session_and_closes() {
        let mut session = create_test_session("gpt-4");
        let mut picker = PickerController::new();
        picker.open_model_picker(&session);
        picker.state_mut().unwrap().move_down();

        let applied = picker.apply_selection(&mut session);
        assert_eq!(applied.as_deref(), Some("gpt-4-turbo"));
        assert_eq!(session.selected_model, "gpt-4-turbo");
        assert!(!picker.is_open());
    }

    #[test]
    fn applying_with_no_picker_is_a_no_op() {
        let mut session = create_test_session("gpt-4");
        let mut picker = PickerController::new();
        assert!(picker.apply_selection(&mut session).is_none());
        assert_eq!(session.selected_model, "gpt-4");
    }
}
