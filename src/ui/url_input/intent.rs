use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UrlInputIntent {
    Insert(char),
    /// Bracketed paste. Line breaks are dropped.
    Paste(String),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    Home,
    End,
    Clear,
}

impl Intent for UrlInputIntent {}
