use crate::clipboard::ClipboardSink;
use crate::config::UiConfig;
use crate::service::{ShortenError, ShortenResult};
use crate::shortener::{SubmissionController, SubmissionObserver, SubmissionState};
use crate::ui::mvi::Reducer;
use crate::ui::toast::{ToastIntent, ToastLevel, ToastReducer, ToastState};
use crate::ui::url_input::{UrlInputIntent, UrlInputReducer, UrlInputState};
use std::sync::mpsc::{self, Receiver, Sender};

pub const INPUT_PLACEHOLDER: &str = "Input Url";
pub const ERROR_PLACEHOLDER: &str = "Please enter a valid URL";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    ShortUrl,
    LongUrl,
}

/// What the controller observer reports back to the app.
#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Resolved,
    Failed(&'static str),
}

/// Forwards settled submissions to the app over a channel, keeping the
/// controller free of any UI code.
struct NoticeObserver {
    tx: Sender<Notice>,
}

impl SubmissionObserver for NoticeObserver {
    fn on_resolved(&mut self, _result: &ShortenResult) {
        let _ = self.tx.send(Notice::Resolved);
    }

    fn on_failed(&mut self, error: &ShortenError) {
        let _ = self.tx.send(Notice::Failed(error.user_message()));
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// URL text field (MVI pattern).
    url_input: UrlInputState,
    /// Text of the latest issued submit.
    submitted_text: Option<String>,
    /// Toast line (MVI pattern).
    toast: ToastState,
    controller: SubmissionController,
    clipboard: Option<Box<dyn ClipboardSink>>,
    notices: Receiver<Notice>,
    toast_ticks: u16,
    animation_tick: u8,
    service_label: String,
}

impl App {
    pub fn new(
        mut controller: SubmissionController,
        clipboard: Option<Box<dyn ClipboardSink>>,
        ui: &UiConfig,
    ) -> Self {
        let (tx, notices) = mpsc::channel();
        controller.add_observer(Box::new(NoticeObserver { tx }));
        Self {
            should_quit: false,
            focus: Focus::Input,
            url_input: UrlInputState::default(),
            submitted_text: None,
            toast: ToastState::default(),
            controller,
            clipboard,
            notices,
            toast_ticks: ui.toast_ticks,
            animation_tick: 0,
            service_label: String::new(),
        }
    }

    /// Shown in the header, typically the service host.
    pub fn with_service_label(mut self, label: impl Into<String>) -> Self {
        self.service_label = label.into();
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn url_input(&self) -> &UrlInputState {
        &self.url_input
    }

    pub fn submission(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn service_label(&self) -> &str {
        &self.service_label
    }

    pub fn controller_mut(&mut self) -> &mut SubmissionController {
        &mut self.controller
    }

    /// Placeholder for the empty input: switches to an error prompt after a
    /// failed submission.
    pub fn placeholder(&self) -> &'static str {
        if self.submission().is_failed() {
            ERROR_PLACEHOLDER
        } else {
            INPUT_PLACEHOLDER
        }
    }

    pub fn on_tick(&mut self) {
        if self.submission().is_requesting() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
        dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Tick);
    }

    /// Edit the URL field. Editing always moves focus back to the input.
    pub fn on_input(&mut self, intent: UrlInputIntent) {
        self.focus = Focus::Input;
        dispatch_mvi!(self, url_input, UrlInputReducer, intent);
    }

    pub fn on_paste(&mut self, text: String) {
        self.on_input(UrlInputIntent::Paste(text));
    }

    /// Submit the current input. Returns `false` when nothing was issued.
    pub fn submit(&mut self) -> bool {
        let text = self.url_input.value().to_string();
        self.focus = Focus::Input;
        match self.controller.submit(&text) {
            Some(_) => {
                self.animation_tick = 0;
                self.submitted_text = Some(text);
                true
            }
            None => {
                self.show_toast("Still shortening the previous URL", ToastLevel::Info);
                false
            }
        }
    }

    /// Esc: clear the field and return to the initial form.
    pub fn clear(&mut self) {
        dispatch_mvi!(self, url_input, UrlInputReducer, UrlInputIntent::Clear);
        self.submitted_text = None;
        self.controller.reset();
        self.focus = Focus::Input;
        dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Dismiss);
    }

    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.submission().resolved().is_some()) {
            (Focus::Input, true) => Focus::ShortUrl,
            (Focus::ShortUrl, true) => Focus::LongUrl,
            _ => Focus::Input,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match (self.focus, self.submission().resolved().is_some()) {
            (Focus::Input, true) => Focus::LongUrl,
            (Focus::LongUrl, true) => Focus::ShortUrl,
            _ => Focus::Input,
        };
    }

    /// Copy the URL of the focused result panel.
    pub fn copy_focused(&mut self) -> bool {
        let Some((short_url, long_url)) = self.submission().resolved() else {
            return false;
        };
        let text = match self.focus {
            Focus::LongUrl => long_url.to_string(),
            Focus::ShortUrl | Focus::Input => short_url.to_string(),
        };
        self.copy_text(&text)
    }

    pub fn copy_short_url(&mut self) -> bool {
        let Some((short_url, _)) = self.submission().resolved() else {
            return false;
        };
        let text = short_url.to_string();
        self.copy_text(&text)
    }

    fn copy_text(&mut self, text: &str) -> bool {
        let result = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(text),
            None => {
                self.show_toast("Clipboard is not available", ToastLevel::Error);
                return false;
            }
        };

        match result {
            Ok(()) => {
                tracing::debug!(len = text.len(), "Copied to clipboard");
                self.show_toast("Copied to clipboard", ToastLevel::Info);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                self.show_toast("Copy failed", ToastLevel::Error);
                false
            }
        }
    }

    /// Apply finished service calls and react to what observers reported.
    pub fn poll_service(&mut self) {
        self.controller.drain_completions();
        while let Ok(notice) = self.notices.try_recv() {
            match notice {
                Notice::Resolved => {
                    self.show_toast(
                        "Short URL ready (Tab to select, Enter to copy)",
                        ToastLevel::Info,
                    );
                }
                Notice::Failed(message) => {
                    // Empty the field so the error placeholder shows, unless
                    // it was edited after the submit.
                    if self.submitted_text.as_deref() == Some(self.url_input.value()) {
                        dispatch_mvi!(self, url_input, UrlInputReducer, UrlInputIntent::Clear);
                    }
                    self.focus = Focus::Input;
                    self.show_toast(message, ToastLevel::Error);
                }
            }
        }
    }

    fn show_toast(&mut self, message: &str, level: ToastLevel) {
        dispatch_mvi!(
            self,
            toast,
            ToastReducer,
            ToastIntent::Show {
                message: message.to_string(),
                level,
                ticks: self.toast_ticks,
            }
        );
    }
}
