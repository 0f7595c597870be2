use crate::ui::app::App;
use crate::ui::screen::ScreenState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press onto app transitions for the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return;
    }

    match app.screen() {
        ScreenState::Cart => handle_cart_key(app, key),
        ScreenState::Detail { .. } => handle_detail_key(app, key),
    }
}

fn handle_cart_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cart_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cart_cursor(1),
        KeyCode::Enter => app.select_cursor_product(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.increment_quantity(),
        KeyCode::Char('-') | KeyCode::Down => app.decrement_quantity(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}
