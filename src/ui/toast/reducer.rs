use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A new toast replaces whatever is showing.
            ToastIntent::Show {
                message,
                level,
                ticks,
            } if ticks > 0 => ToastState::Visible {
                message,
                level,
                remaining_ticks: ticks,
            },
            ToastIntent::Show { .. } => state,
            ToastIntent::Tick => match state {
                ToastState::Visible {
                    remaining_ticks: 0 | 1,
                    ..
                } => ToastState::Hidden,
                ToastState::Visible {
                    message,
                    level,
                    remaining_ticks,
                } => ToastState::Visible {
                    message,
                    level,
                    remaining_ticks: remaining_ticks - 1,
                },
                ToastState::Hidden => ToastState::Hidden,
            },
            ToastIntent::Dismiss => ToastState::Hidden,
        }
    }
}
