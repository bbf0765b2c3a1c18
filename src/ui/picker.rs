#[derive(Debug, Clone)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    pub title: String,
    pub items: Vec<PickerItem>,
    pub selected: usize,
}

impl PickerState {
    pub fn new<T: Into<String>>(title: T, items: Vec<PickerItem>, selected: usize) -> Self {
        Self {
            title: title.into(),
            items,
            selected,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.items.get(self.selected).map(|i| i.id.as_str())
    }

    pub fn selected_item(&self) -> Option<&PickerItem> {
        self.items.get(self.selected)
    }

    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            if self.selected == 0 {
                self.selected = self.items.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> PickerItem {
        PickerItem {
            id: id.to_string(),
            label: id.to_uppercase(),
            detail: None,
        }
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        let mut picker = PickerState::new("SELECT", vec![item("a"), item("b"), item("c")], 0);
        picker.move_up();
        assert_eq!(picker.selected_id(), Some("c"));
        picker.move_down();
        assert_eq!(picker.selected_id(), Some("a"));
        picker.move_down();
        assert_eq!(picker.selected_id(), Some("b"));
    }

    #[test]
    fn empty_picker_has_no_selection() {
        let mut picker = PickerState::new("SELECT", Vec::new(), 0);
        picker.move_down();
        picker.move_up();
        assert_eq!(picker.selected_id(), None);
    }
}
