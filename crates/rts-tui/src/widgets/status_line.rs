//! Status line — one row between the input and the list.
//!
//! Shows, in priority order: the loading indicator, the last fetch error
//! (only when `show_errors` is on), the "no results" indicator, or a result
//! count.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rts_core::SearchView;

/// What the status row is currently saying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    NoResults,
    Error(String),
    Count(usize),
    /// Nothing typed yet.
    Idle,
}

impl Status {
    pub fn from_view(query: &str, view: &SearchView, show_errors: bool) -> Self {
        if view.loading {
            return Status::Loading;
        }
        if query.is_empty() {
            return Status::Idle;
        }
        match &view.last_error {
            Some(err) if show_errors => Status::Error(err.to_string()),
            _ if view.results.is_empty() => Status::NoResults,
            _ => Status::Count(view.results.len()),
        }
    }
}

pub struct StatusLine<'a> {
    status: Status,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(status: Status, theme: &'a Theme) -> Self {
        Self { status, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = match self.status {
            Status::Loading => Span::styled(" Loading...", self.theme.status_loading),
            Status::NoResults => Span::styled(" No results found here", self.theme.status_no_results),
            Status::Error(msg) => Span::styled(format!(" {msg}"), self.theme.status_error),
            Status::Count(1) => Span::styled(" 1 user", self.theme.status_summary),
            Status::Count(n) => Span::styled(format!(" {n} users"), self.theme.status_summary),
            Status::Idle => Span::raw(""),
        };
        Paragraph::new(Line::from(span)).render(area, buf);
    }
}
