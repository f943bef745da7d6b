use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlInputState {
    pub text: String,
    /// Cursor position in chars, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl UiState for UrlInputState {}

impl UrlInputState {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text as it will be submitted.
    pub fn value(&self) -> &str {
        self.text.trim()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the char at `cursor`.
    pub(crate) fn byte_index(&self, cursor: usize) -> usize {
        self.text
            .char_indices()
            .nth(cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}
