use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_text_style: Style,
    pub system_text_style: Style,

    // Chrome
    pub title_style: Style,
    pub sidebar_border_style: Style,
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub hint_style: Style,
    pub badge_style: Style,
    pub selection_style: Style,

    // Input area
    pub input_text_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_text_style: Style::default().fg(Color::White),
            system_text_style: Style::default().fg(Color::DarkGray),

            title_style: Style::default().fg(Color::Gray),
            sidebar_border_style: Style::default().fg(Color::DarkGray),
            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            hint_style: Style::default().fg(Color::DarkGray),
            badge_style: Style::default().fg(Color::Green),
            selection_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            input_text_style: Style::default().fg(Color::White),
        }
    }

    /// Muted palette used while incognito mode is active. Purely a
    /// presentation-layer marker; no data handling changes.
    pub fn incognito() -> Self {
        Theme {
            background_color: Color::Black,
            user_prefix_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Magenta),
            assistant_text_style: Style::default().fg(Color::Gray),
            system_text_style: Style::default().fg(Color::DarkGray),

            title_style: Style::default().fg(Color::Magenta),
            sidebar_border_style: Style::default().fg(Color::Magenta),
            input_border_style: Style::default().fg(Color::Magenta),
            input_title_style: Style::default().fg(Color::Magenta),
            hint_style: Style::default().fg(Color::DarkGray),
            badge_style: Style::default().fg(Color::Magenta),
            selection_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            input_text_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn for_session(incognito: bool) -> Self {
        if incognito {
            Self::incognito()
        } else {
            Self::dark_default()
        }
    }
}
