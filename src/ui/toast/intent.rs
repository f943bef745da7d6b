use crate::ui::mvi::Intent;

use super::state::ToastLevel;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    Show {
        message: String,
        level: ToastLevel,
        ticks: u16,
    },
    Tick,
    Dismiss,
}

impl Intent for ToastIntent {}
