//! Main shell event loop
//!
//! Owns the terminal lifecycle and the 50 ms input poll. Timer-driven
//! events (copied-indicator reverts) come back over an unbounded channel
//! so the loop stays the only writer of application state.

use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tui_textarea::Input as TAInput;

use crate::core::app::{is_supported_attachment, App, Attachment, ShellEvent, UiMode};
use crate::ui::layout::Viewport;
use crate::ui::renderer::ui;
use crate::utils::clipboard::SystemClipboard;
use crate::utils::haptics::{HapticEngine, HapticIntensity};

pub async fn run_shell(model: String, incognito: bool) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(model, incognito, HapticEngine::detect(), Arc::new(SystemClipboard));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if let Ok(size) = terminal.size() {
        app.ui
            .set_viewport(Viewport::from_cell_grid(size.width, size.height));
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<ShellEvent>();

    let result = 'main_loop: loop {
        if app.ui.exit_requested {
            break 'main_loop Ok(());
        }
        terminal.draw(|f| ui(f, &mut app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key, &tx).await;
                }
                Event::Resize(width, height) => {
                    app.ui.set_viewport(Viewport::from_cell_grid(width, height));
                }
                _ => {}
            }
        }

        while let Ok(shell_event) = rx.try_recv() {
            match shell_event {
                ShellEvent::CopyExpired { message_id } => {
                    app.ui.clear_copied(&message_id);
                    app.ui.clear_status();
                }
            }
        }
    };

    app.ui.cancel_copy_timers();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn handle_key(app: &mut App, key: KeyEvent, tx: &mpsc::UnboundedSender<ShellEvent>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit works from every mode, including the rotate notice.
    if ctrl && key.code == KeyCode::Char('c') {
        app.ui.exit_requested = true;
        return;
    }

    // While the rotate notice covers the screen only resize and quit apply.
    if app.ui.viewport.needs_rotation_notice() {
        return;
    }

    if app.picker.is_open() {
        handle_picker_key(app, key);
        return;
    }

    if app.ui.composer.show_aspect_selector {
        handle_aspect_key(app, key);
        return;
    }

    match app.ui.mode.clone() {
        UiMode::ChatSearch => handle_search_key(app, key),
        UiMode::AttachPrompt { input } => handle_attach_key(app, key, input),
        UiMode::Typing => handle_typing_key(app, key, tx).await,
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.picker.close(),
        KeyCode::Up => {
            if let Some(state) = app.picker.state_mut() {
                state.move_up();
            }
        }
        KeyCode::Down => {
            if let Some(state) = app.picker.state_mut() {
                state.move_down();
            }
        }
        KeyCode::Enter => {
            if app.picker.apply_selection(&mut app.session).is_some() {
                app.session.haptics.trigger(HapticIntensity::Medium);
            }
        }
        _ => {}
    }
}

fn handle_aspect_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.ui.composer.show_aspect_selector = false,
        KeyCode::Left => {
            app.ui.composer.aspect_ratio = app.ui.composer.aspect_ratio.prev();
        }
        KeyCode::Right | KeyCode::Tab => {
            app.ui.composer.aspect_ratio = app.ui.composer.aspect_ratio.next();
        }
        KeyCode::Enter => {
            let ratio = app.ui.composer.aspect_ratio;
            app.ui.composer.select_aspect_ratio(ratio);
            app.session.haptics.trigger(HapticIntensity::Light);
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.ui.mode = UiMode::Typing,
        KeyCode::Backspace => app.ui.sidebar.pop_query_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.sidebar.push_query_char(c);
        }
        _ => {}
    }
}

fn handle_attach_key(app: &mut App, key: KeyEvent, mut input: String) {
    match key.code {
        KeyCode::Esc => app.ui.mode = UiMode::Typing,
        KeyCode::Enter => {
            let path = input.trim();
            if !path.is_empty() {
                let attachment = Attachment::from_path(path);
                if is_supported_attachment(&attachment.name) {
                    app.session.haptics.trigger(HapticIntensity::Light);
                } else {
                    // Advisory only; the attachment is still staged.
                    app.ui
                        .set_status(format!("Unrecognized file type: {}", attachment.name));
                    app.session.haptics.trigger(HapticIntensity::Warning);
                }
                app.ui.composer.add_attachment(attachment);
            }
            app.ui.mode = UiMode::Typing;
        }
        KeyCode::Backspace => {
            input.pop();
            app.ui.mode = UiMode::AttachPrompt { input };
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.push(c);
            app.ui.mode = UiMode::AttachPrompt { input };
        }
        _ => {}
    }
}

async fn handle_typing_key(app: &mut App, key: KeyEvent, tx: &mpsc::UnboundedSender<ShellEvent>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('d') if ctrl => {
            if !app.ui.composer.has_content() {
                app.ui.exit_requested = true;
            }
        }
        KeyCode::Char('b') if ctrl => {
            app.session.toggle_sidebar();
            app.session.haptics.trigger(HapticIntensity::Medium);
        }
        KeyCode::Char('g') if ctrl => {
            app.session.toggle_incognito();
            app.session.haptics.trigger(HapticIntensity::Medium);
        }
        KeyCode::Char('o') if ctrl => {
            app.picker.open_model_picker(&app.session);
            app.session.haptics.trigger(HapticIntensity::Light);
        }
        KeyCode::Char('f') if ctrl => {
            app.ui.mode = UiMode::ChatSearch;
        }
        KeyCode::Char('t') if ctrl => {
            app.ui.mode = UiMode::AttachPrompt {
                input: String::new(),
            };
        }
        KeyCode::Char('x') if ctrl => {
            if app.ui.composer.remove_last_attachment().is_some() {
                app.session.haptics.trigger(HapticIntensity::Light);
            }
        }
        KeyCode::Char('r') if ctrl => {
            app.ui.composer.show_aspect_selector = true;
        }
        KeyCode::Char('y') if ctrl => {
            if let Some(id) = app.ui.latest_assistant_message().map(|m| m.id.clone()) {
                app.conversation()
                    .copy_message_to_clipboard(&id, tx.clone())
                    .await;
            }
        }
        KeyCode::Enter
            if key.modifiers.contains(KeyModifiers::SHIFT)
                || key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.ui.composer.insert_newline();
        }
        KeyCode::Enter => {
            app.conversation().submit_draft();
        }
        KeyCode::Up => app.ui.scroll_up(1),
        KeyCode::Down => app.ui.scroll_down(1, u16::MAX),
        _ => {
            app.ui.composer.textarea_mut().input(TAInput::from(key));
        }
    }
}
