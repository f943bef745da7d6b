use crate::ui::app::{App, Focus};
use crate::ui::url_input::UrlInputIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'y') {
        app.copy_short_url();
        return;
    }

    match key.code {
        KeyCode::Esc => app.clear(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => match app.focus() {
            Focus::Input => {
                app.submit();
            }
            Focus::ShortUrl | Focus::LongUrl => {
                app.copy_focused();
            }
        },
        _ if app.focus() != Focus::Input => {
            if matches!(key.code, KeyCode::Char('c')) {
                app.copy_focused();
            } else if let Some(intent) = edit_intent(key) {
                app.on_input(intent);
            }
        }
        _ => {
            if let Some(intent) = edit_intent(key) {
                app.on_input(intent);
            }
        }
    }
}

fn edit_intent(key: KeyEvent) -> Option<UrlInputIntent> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'u') => Some(UrlInputIntent::Clear),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'a') => Some(UrlInputIntent::Home),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'e') => Some(UrlInputIntent::End),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(ch) => Some(UrlInputIntent::Insert(ch)),
        KeyCode::Backspace => Some(UrlInputIntent::Backspace),
        KeyCode::Delete => Some(UrlInputIntent::Delete),
        KeyCode::Left => Some(UrlInputIntent::MoveLeft),
        KeyCode::Right => Some(UrlInputIntent::MoveRight),
        KeyCode::Home => Some(UrlInputIntent::Home),
        KeyCode::End => Some(UrlInputIntent::End),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
