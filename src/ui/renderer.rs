use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::app::{App, UiMode};
use crate::core::chats::format_relative_time;
use crate::core::message::Role;
use crate::ui::layout::compute_layout;
use crate::ui::theme::Theme;

pub fn ui(f: &mut Frame, app: &mut App) {
    let theme = Theme::for_session(app.session.incognito_mode);
    f.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(theme.background_color)),
        f.area(),
    );

    // Narrow portrait hosts get the static rotate notice and nothing else.
    if app.ui.viewport.needs_rotation_notice() {
        draw_rotation_notice(f, &theme);
        return;
    }

    let composer_height = composer_area_height(app);
    let layout = compute_layout(f.area(), app.session.sidebar_open, composer_height);

    draw_transcript(f, app, &theme, layout.transcript);
    draw_composer(f, app, &theme, layout.composer);

    if let Some(area) = layout.sidebar {
        if layout.sidebar_overlay {
            f.render_widget(Clear, area);
        }
        draw_sidebar(f, app, &theme, area);
    }

    if app.ui.composer.show_aspect_selector {
        draw_aspect_selector(f, app, &theme, layout.composer);
    }

    if app.picker.is_open() {
        draw_model_picker(f, app, &theme);
    }
}

fn composer_area_height(app: &App) -> u16 {
    let input_rows = (app.ui.composer.textarea().lines().len() as u16).clamp(1, 6);
    let attachment_row = u16::from(!app.ui.composer.attachments.is_empty());
    // input + borders + footer line
    input_rows + attachment_row + 3
}

fn draw_rotation_notice(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  ↻", theme.title_style)),
        Line::from(Span::styled("ROTATE YOUR DEVICE", theme.title_style)).centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Please rotate your device to landscape mode for the best experience",
            theme.hint_style,
        ))
        .centered(),
    ];
    let notice = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(notice, area);
}

fn draw_transcript(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let incognito_marker = if app.session.incognito_mode {
        " • incognito"
    } else {
        ""
    };
    let title = format!(
        "OmniDev v{} — {}{}",
        env!("CARGO_PKG_VERSION"),
        app.session.current_model().name,
        incognito_marker
    );

    let lines = if app.ui.welcome_active() {
        welcome_lines(app, theme)
    } else {
        transcript_lines(app, theme)
    };

    let available_height = area.height.saturating_sub(1);
    let total_lines = lines.len() as u16;
    let max_offset = total_lines.saturating_sub(available_height);
    let scroll_offset = if app.ui.auto_scroll {
        max_offset
    } else {
        app.ui.scroll_offset.min(max_offset)
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(Span::styled(title, theme.title_style)))
        .wrap(Wrap { trim: true })
        .scroll((scroll_offset, 0));
    f.render_widget(paragraph, area);
}

fn welcome_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("WELCOME TO OMNIDEV", theme.title_style)).centered(),
        Line::from(Span::styled("Your multimodal AI workspace", theme.hint_style)).centered(),
        Line::from(""),
    ];
    for (heading, body) in [
        ("START A CONVERSATION", "Ask me anything or start a new project"),
        ("UPLOAD MEDIA", "Share images, videos, or documents (Ctrl+T)"),
        ("SWITCH MODELS", "Choose from multiple AI models (Ctrl+O)"),
    ] {
        lines.push(Line::from(Span::styled(heading.to_string(), theme.badge_style)).centered());
        lines.push(Line::from(Span::styled(body.to_string(), theme.hint_style)).centered());
        lines.push(Line::from(""));
    }
    if let Some(greeting) = app.ui.messages.front() {
        lines.push(
            Line::from(Span::styled(greeting.content.clone(), theme.system_text_style)).centered(),
        );
    }
    lines
}

fn transcript_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for msg in &app.ui.messages {
        match msg.role {
            Role::User => {
                lines.push(Line::from(vec![
                    Span::styled("You: ", theme.user_prefix_style),
                    Span::styled(msg.content.clone(), theme.user_text_style),
                ]));
            }
            Role::System => {
                lines.push(Line::from(Span::styled(
                    msg.content.clone(),
                    theme.system_text_style,
                )));
            }
            Role::Assistant => {
                let mut header = vec![Span::styled(
                    msg.model.clone().unwrap_or_default(),
                    theme.badge_style,
                )];
                header.push(Span::styled(
                    format!("  {}", msg.timestamp.format("%H:%M")),
                    theme.hint_style,
                ));
                if app.ui.is_copied(&msg.id) {
                    header.push(Span::styled("  ✓ copied", theme.badge_style));
                }
                lines.push(Line::from(header));
                for content_line in msg.content.lines() {
                    lines.push(Line::from(Span::styled(
                        content_line.to_string(),
                        theme.assistant_text_style,
                    )));
                }
                if msg.is_streaming {
                    lines.push(Line::from(Span::styled("● ● ●", theme.hint_style)));
                }
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

fn draw_composer(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let title = match &app.ui.mode {
        UiMode::AttachPrompt { input } => format!("Attach file: {input}▏(Enter to add, Esc to cancel)"),
        UiMode::ChatSearch => "Searching chats… (Esc to return)".to_string(),
        UiMode::Typing => {
            "Message OmniDev… (Enter to send, Shift+Enter for new line, Ctrl+C to quit)".to_string()
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(title, theme.input_title_style));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut rows = inner;
    if !app.ui.composer.attachments.is_empty() {
        let attachment_row = Rect::new(rows.x, rows.y, rows.width, 1);
        let names: Vec<String> = app
            .ui
            .composer
            .attachments
            .iter()
            .map(|a| format!("[{}]", truncate_to_width(&a.name, 24)))
            .collect();
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("⎘ {}", names.join(" ")),
                theme.badge_style,
            ))),
            attachment_row,
        );
        rows = Rect::new(rows.x, rows.y + 1, rows.width, rows.height.saturating_sub(1));
    }

    let footer_height = 1;
    let input_area = Rect::new(
        rows.x,
        rows.y,
        rows.width,
        rows.height.saturating_sub(footer_height),
    );
    let textarea = app.ui.composer.textarea_mut();
    textarea.set_style(theme.input_text_style);
    f.render_widget(&*textarea, input_area);

    let footer_area = Rect::new(rows.x, rows.y + input_area.height, rows.width, footer_height);
    let model = app.session.current_model();
    let footer = Line::from(vec![
        Span::styled("● ", theme.badge_style),
        Span::styled(model.id, theme.hint_style),
        Span::styled(
            format!("  ·  {}", app.ui.composer.aspect_ratio.as_str()),
            theme.hint_style,
        ),
        Span::styled(
            app.ui
                .status
                .as_ref()
                .map(|s| format!("  ·  {s}"))
                .unwrap_or_default(),
            theme.hint_style,
        ),
    ]);
    f.render_widget(Paragraph::new(footer), footer_area);
}

fn draw_sidebar(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.sidebar_border_style)
        .title(Span::styled("OMNIDEV", theme.title_style));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let search_style = if app.ui.mode == UiMode::ChatSearch {
        theme.selection_style
    } else {
        theme.hint_style
    };
    let incognito_line = if app.session.incognito_mode {
        Line::from(Span::styled("◉ Incognito on", theme.badge_style))
    } else {
        Line::from(Span::styled("○ Incognito off", theme.hint_style))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("⌕ Search: {}", app.ui.sidebar.search_query),
            search_style,
        )),
        incognito_line,
        Line::from(""),
        Line::from(Span::styled("RECENT CHATS", theme.title_style)),
    ];
    for chat in app.ui.sidebar.filtered_chats() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&chat.title, inner.width as usize),
            theme.assistant_text_style,
        )));
        let mut meta = String::new();
        if let Some(folder) = &chat.folder {
            meta.push_str(folder);
            meta.push_str(" · ");
        }
        meta.push_str(&format_relative_time(chat.timestamp));
        lines.push(Line::from(Span::styled(format!("  {meta}"), theme.hint_style)));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_aspect_selector(f: &mut Frame, app: &App, theme: &Theme, composer_area: Rect) {
    use crate::core::app::AspectRatio;

    let width = 38.min(composer_area.width);
    let area = Rect::new(
        composer_area.x + 1,
        composer_area.y.saturating_sub(3),
        width,
        3,
    );
    f.render_widget(Clear, area);

    let mut spans = Vec::new();
    for ratio in AspectRatio::ALL {
        let style = if ratio == app.ui.composer.aspect_ratio {
            theme.selection_style
        } else {
            theme.hint_style
        };
        spans.push(Span::styled(format!(" {} ", ratio.as_str()), style));
    }
    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.input_border_style)
            .title(Span::styled("ASPECT RATIO", theme.input_title_style)),
    );
    f.render_widget(selector, area);
}

fn draw_model_picker(f: &mut Frame, app: &App, theme: &Theme) {
    let Some(picker) = app.picker.state() else {
        return;
    };

    let area = centered_rect(f.area(), 56, (picker.items.len() as u16) * 2 + 2);
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (idx, item) in picker.items.iter().enumerate() {
        let style = if idx == picker.selected {
            theme.selection_style
        } else {
            theme.assistant_text_style
        };
        lines.push(Line::from(Span::styled(item.label.clone(), style)));
        if let Some(detail) = &item.detail {
            lines.push(Line::from(Span::styled(
                format!("  {detail}"),
                theme.hint_style,
            )));
        }
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.input_border_style)
            .title(Span::styled(picker.title.clone(), theme.title_style)),
    );
    f.render_widget(panel, area);
}

/// Trim to a display-cell budget, honoring wide glyphs.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn centered_rect(frame: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);
    Rect::new(
        frame.x + (frame.width - width) / 2,
        frame.y + (frame.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_pass_through_untruncated() {
        assert_eq!(truncate_to_width("photo.png", 24), "photo.png");
    }

    #[test]
    fn long_names_are_cut_with_an_ellipsis() {
        let cut = truncate_to_width("a-very-long-attachment-filename.png", 12);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 12);
    }

    #[test]
    fn wide_glyphs_count_as_two_cells() {
        let cut = truncate_to_width("日本語のファイル名.png", 8);
        assert!(cut.width() <= 8);
    }

    #[test]
    fn centered_rect_never_exceeds_the_frame() {
        let frame = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(frame, 56, 14);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }
}
