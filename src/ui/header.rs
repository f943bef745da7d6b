use crate::shortener::SubmissionState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    service_label: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(service_label: &'a str) -> Self {
        Self { service_label }
    }

    pub fn widget(&self, state: &SubmissionState) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = status_label(state);

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(
                "linkshrink",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.service_label.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(self.service_label, text_style));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(status, Style::default().fg(status_color)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(state: &SubmissionState) -> (&'static str, ratatui::style::Color) {
    match state {
        SubmissionState::Idle => ("Ready", HEADER_TEXT),
        SubmissionState::Requesting => ("Working", ACCENT),
        SubmissionState::Resolved { .. } => ("Done", STATUS_OK),
        SubmissionState::Failed { .. } => ("Failed", STATUS_ERROR),
    }
}
