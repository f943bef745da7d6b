use crate::shortener::SubmissionState;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, result_panels};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use crate::ui::toast::ToastLevel;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const REQUESTING_STATUS: &str = "Shortening URL...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(
        Header::new(app.service_label()).widget(app.submission()),
        regions.header,
    );
    render_input(frame, app, regions.input);

    frame.render_widget(Clear, regions.body);
    match app.submission() {
        SubmissionState::Idle => render_hint(frame, regions.body),
        SubmissionState::Requesting => render_progress(frame, regions.body, app.animation_tick()),
        SubmissionState::Resolved {
            short_url,
            long_url,
        } => render_results(frame, regions.body, short_url, long_url, app.focus()),
        SubmissionState::Failed { .. } => render_failure(frame, regions.body),
    }

    if let Some((message, level)) = app.toast().message() {
        let color = match level {
            ToastLevel::Info => STATUS_OK,
            ToastLevel::Error => STATUS_ERROR,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(color),
            ))),
            regions.toast,
        );
    }

    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

fn render_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }

    let failed = app.submission().is_failed();
    let focused = app.focus() == Focus::Input;
    let border_color = if failed {
        STATUS_ERROR
    } else if focused {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };

    let block = Block::default()
        .title(" URL ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = app.url_input();
    let width = inner.width as usize;
    let (visible, cursor_col) = visible_window(&input.text, input.cursor, width);

    let line = if input.is_empty() {
        let color = if failed { STATUS_ERROR } else { PLACEHOLDER_TEXT };
        Line::from(Span::styled(
            app.placeholder(),
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(visible, Style::default().fg(HEADER_TEXT)))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 && inner.height > 0 && !app.submission().is_requesting() {
        let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_hint(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Type or paste a long URL and press Enter.",
            Style::default().fg(PLACEHOLDER_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Spinner plus status text.
fn render_progress(frame: &mut Frame<'_>, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(ACCENT)),
            Span::styled(REQUESTING_STATUS, Style::default().fg(HEADER_TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_failure(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Could not shorten that URL. Check it and try again.",
            Style::default().fg(STATUS_ERROR),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_results(frame: &mut Frame<'_>, area: Rect, short_url: &str, long_url: &str, focus: Focus) {
    let (short_area, long_area) = result_panels(area);
    render_panel(frame, short_area, " Shortened URL ", short_url, focus == Focus::ShortUrl);
    render_panel(frame, long_area, " Original URL ", long_url, focus == Focus::LongUrl);
}

/// One copyable result panel.
fn render_panel(frame: &mut Frame<'_>, area: Rect, title: &str, url: &str, focused: bool) {
    if area.height == 0 {
        return;
    }

    let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let mut block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if focused {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let hint = if focused { "  [Enter] Copy" } else { "" };
    let inner_width = area.width.saturating_sub(2) as usize;
    let url_text = truncate_middle(url, inner_width.saturating_sub(hint.chars().count() + 1));

    let line = Line::from(vec![
        Span::styled(
            format!(" {}", url_text),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(hint, Style::default().fg(PLACEHOLDER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Slice of `text` that fits in `width` columns with the cursor visible.
/// Returns the slice and the cursor column within it.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let start = (cursor + 1).saturating_sub(width);
    let visible: String = text.chars().skip(start).take(width).collect();
    (visible, cursor - start)
}

/// Shorten `text` to `max` chars by eliding the middle.
fn truncate_middle(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let keep = max - 3;
    let head = keep.div_ceil(2);
    let tail = keep - head;
    let mut out: String = text.chars().take(head).collect();
    out.push_str("...");
    out.extend(text.chars().skip(len - tail));
    out
}
