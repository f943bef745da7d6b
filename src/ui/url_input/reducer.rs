use crate::ui::mvi::Reducer;

use super::intent::UrlInputIntent;
use super::state::UrlInputState;

pub struct UrlInputReducer;

impl Reducer for UrlInputReducer {
    type State = UrlInputState;
    type Intent = UrlInputIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UrlInputIntent::Insert(ch) => {
                if ch.is_control() {
                    return state;
                }
                let at = state.byte_index(state.cursor);
                state.text.insert(at, ch);
                state.cursor += 1;
                state
            }
            UrlInputIntent::Paste(pasted) => {
                let cleaned: String = pasted.chars().filter(|c| !c.is_control()).collect();
                let at = state.byte_index(state.cursor);
                state.text.insert_str(at, &cleaned);
                state.cursor += cleaned.chars().count();
                state
            }
            UrlInputIntent::Backspace => {
                if state.cursor == 0 {
                    return state;
                }
                let at = state.byte_index(state.cursor - 1);
                state.text.remove(at);
                state.cursor -= 1;
                state
            }
            UrlInputIntent::Delete => {
                if state.cursor < state.char_len() {
                    let at = state.byte_index(state.cursor);
                    state.text.remove(at);
                }
                state
            }
            UrlInputIntent::MoveLeft => {
                state.cursor = state.cursor.saturating_sub(1);
                state
            }
            UrlInputIntent::MoveRight => {
                state.cursor = (state.cursor + 1).min(state.char_len());
                state
            }
            UrlInputIntent::Home => {
                state.cursor = 0;
                state
            }
            UrlInputIntent::End => {
                state.cursor = state.char_len();
                state
            }
            UrlInputIntent::Clear => UrlInputState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(text: &str) -> UrlInputState {
        text.chars().fold(UrlInputState::default(), |state, ch| {
            UrlInputReducer::reduce(state, UrlInputIntent::Insert(ch))
        })
    }

    #[test]
    fn typing_appends_and_moves_cursor() {
        let state = type_text("https://a.b");
        assert_eq!(state.text, "https://a.b");
        assert_eq!(state.cursor, 11);
    }

    #[test]
    fn insert_in_the_middle() {
        let state = type_text("htps");
        let state = UrlInputReducer::reduce(state, UrlInputIntent::Home);
        let state = UrlInputReducer::reduce(state, UrlInputIntent::MoveRight);
        let state = UrlInputReducer::reduce(state, UrlInputIntent::Insert('t'));
        assert_eq!(state.text, "https");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let state = UrlInputReducer::reduce(UrlInputState::default(), UrlInputIntent::Backspace);
        assert!(state.is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn backspace_removes_multibyte_char() {
        let state = type_text("aé");
        let state = UrlInputReducer::reduce(state, UrlInputIntent::Backspace);
        assert_eq!(state.text, "a");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let state = type_text("abc");
        let state = UrlInputReducer::reduce(state, UrlInputIntent::Delete);
        assert_eq!(state.text, "abc");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let state = type_text("abc");
        let state = UrlInputReducer::reduce(state, UrlInputIntent::Home);
        let state = UrlInputReducer::reduce(state, UrlInputIntent::Delete);
        assert_eq!(state.text, "bc");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn move_right_stops_at_end() {
        let state = type_text("ab");
        let state = UrlInputReducer::reduce(state, UrlInputIntent::MoveRight);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn paste_strips_line_breaks() {
        let state = UrlInputReducer::reduce(
            UrlInputState::default(),
            UrlInputIntent::Paste("https://example.com/\r\npath".into()),
        );
        assert_eq!(state.text, "https://example.com/path");
        assert_eq!(state.cursor, 24);
    }

    #[test]
    fn control_chars_are_ignored() {
        let state = UrlInputReducer::reduce(UrlInputState::default(), UrlInputIntent::Insert('\n'));
        assert!(state.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let state = UrlInputReducer::reduce(type_text("abc"), UrlInputIntent::Clear);
        assert_eq!(state, UrlInputState::default());
    }
}
