//! Built-in chat history shown in the sidebar
//!
//! The chat list is read-only in this build: nothing in the message flow
//! creates or deletes entries. The sidebar filters it live against the
//! search query.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub timestamp: DateTime<Local>,
    pub folder: Option<String>,
}

impl Chat {
    fn new(id: &str, title: &str, timestamp: DateTime<Local>, folder: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            timestamp,
            folder: Some(folder.to_string()),
        }
    }
}

pub fn load_builtin_chats() -> Vec<Chat> {
    let now = Local::now();
    vec![
        Chat::new("1", "Welcome to OmniDev", now, "General"),
        Chat::new(
            "2",
            "Design System Discussion",
            now - Duration::days(1),
            "Design",
        ),
        Chat::new("3", "API Integration", now - Duration::days(2), "Development"),
    ]
}

/// Case-insensitive substring filter on chat titles. An empty query keeps
/// the full list in original order.
pub fn filter_chats<'a>(chats: &'a [Chat], query: &str) -> Vec<&'a Chat> {
    let needle = query.to_lowercase();
    chats
        .iter()
        .filter(|chat| chat.title.to_lowercase().contains(&needle))
        .collect()
}

/// Coarse relative timestamp for sidebar entries.
pub fn format_relative_time(timestamp: DateTime<Local>) -> String {
    let elapsed = Local::now().signed_duration_since(timestamp);
    let hours = elapsed.num_hours();
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }
    timestamp.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_case_insensitively() {
        let chats = load_builtin_chats();
        let hits = filter_chats(&chats, "api");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "API Integration");
    }

    #[test]
    fn empty_query_returns_all_in_original_order() {
        let chats = load_builtin_chats();
        let hits = filter_chats(&chats, "");
        let titles: Vec<&str> = hits.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Welcome to OmniDev",
                "Design System Discussion",
                "API Integration"
            ]
        );
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let chats = load_builtin_chats();
        assert!(filter_chats(&chats, "zzz").is_empty());
    }

    #[test]
    fn relative_times_step_through_units() {
        let now = Local::now();
        assert_eq!(format_relative_time(now), "Just now");
        assert_eq!(format_relative_time(now - Duration::hours(3)), "3h ago");
        assert_eq!(format_relative_time(now - Duration::days(2)), "2d ago");
        let old = now - Duration::days(30);
        assert_eq!(format_relative_time(old), old.format("%Y-%m-%d").to_string());
    }
}
