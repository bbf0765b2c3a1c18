use crate::core::chats::{filter_chats, load_builtin_chats, Chat};

/// Sidebar state: the read-only chat list plus the live search query.
pub struct SidebarState {
    pub search_query: String,
    chats: Vec<Chat>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            chats: load_builtin_chats(),
        }
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Chats matching the current query, re-filtered on every keystroke.
    pub fn filtered_chats(&self) -> Vec<&Chat> {
        filter_chats(&self.chats, &self.search_query)
    }

    pub fn push_query_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.search_query.pop();
    }

    pub fn clear_query(&mut self) {
        self.search_query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_narrows_and_clearing_restores() {
        let mut sidebar = SidebarState::new();
        assert_eq!(sidebar.filtered_chats().len(), 3);

        for c in "design".chars() {
            sidebar.push_query_char(c);
        }
        let hits = sidebar.filtered_chats();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Design System Discussion");

        sidebar.clear_query();
        assert_eq!(sidebar.filtered_chats().len(), 3);
    }

    #[test]
    fn backspace_widens_the_match() {
        let mut sidebar = SidebarState::new();
        sidebar.search_query = "apiz".to_string();
        assert!(sidebar.filtered_chats().is_empty());
        sidebar.pop_query_char();
        assert_eq!(sidebar.filtered_chats().len(), 1);
    }
}
