use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible {
        message: String,
        level: ToastLevel,
        /// Ticks left before the toast hides itself.
        remaining_ticks: u16,
    },
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<(&str, ToastLevel)> {
        match self {
            Self::Visible { message, level, .. } => Some((message, *level)),
            Self::Hidden => None,
        }
    }
}
