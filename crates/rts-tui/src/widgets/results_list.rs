//! Results list widget — the scrollable `name (email)` list under the input.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `↓` | Move the highlight one row |
//! | `PageUp` / `PageDown` | Move the highlight one page |
//!
//! # Scroll semantics
//!
//! `offset` = index of the first visible result. `cursor` = absolute index of
//! the highlighted result. The cursor is kept inside the visible window;
//! moving it past an edge scrolls. Both reset whenever the result list is
//! replaced.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use rts_core::{SearchView, User};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResultsListState {
    pub cursor: usize,
    pub offset: usize,
    /// `(completed, len)` of the view the cursor was positioned against.
    seen: (u64, usize),
    /// Cached from the last render so `handle()` can page by screen height.
    last_height: Cell<usize>,
}

impl Default for ResultsListState {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            seen: (0, 0),
            last_height: Cell::new(20),
        }
    }
}

impl ResultsListState {
    /// Reset the highlight to the top when the view holds a new result list.
    pub fn sync(&mut self, view: &SearchView) {
        let now = (view.completed, view.results.len());
        if now != self.seen {
            self.seen = now;
            self.cursor = 0;
            self.offset = 0;
        }
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Handle a navigation event against a list of `total` results.
    pub fn handle(&mut self, event: &AppEvent, total: usize) {
        if total == 0 {
            return;
        }
        let last = total - 1;
        self.cursor = match event {
            AppEvent::Nav(Direction::Up) => self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.cursor + 1).min(last),
            AppEvent::PageUp => self.cursor.saturating_sub(PAGE_STEP.min(self.height())),
            AppEvent::PageDown => (self.cursor + PAGE_STEP.min(self.height())).min(last),
            _ => return,
        };

        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
        tracing::debug!(cursor = self.cursor, offset = self.offset, "results: moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsList<'a> {
    state: &'a ResultsListState,
    results: &'a [User],
    show_email: bool,
    theme: &'a Theme,
}

impl<'a> ResultsList<'a> {
    pub fn new(
        state: &'a ResultsListState,
        results: &'a [User],
        show_email: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, results, show_email, theme }
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Users ")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        self.state.last_height.set(height);

        let total = self.results.len();
        let start = self.state.offset.min(total);
        let end = (start + height).min(total);

        let lines: Vec<Line> = self.results[start..end]
            .iter()
            .enumerate()
            .map(|(row, user)| {
                let line = render_user(user, self.show_email, self.theme);
                if start + row == self.state.cursor {
                    line.patch_style(self.theme.result_selected)
                } else {
                    line
                }
            })
            .collect();

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

fn render_user<'a>(user: &'a User, show_email: bool, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::styled(user.name.as_str(), theme.result_name)];
    if show_email {
        spans.push(Span::styled(format!(" ({})", user.email), theme.result_email));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
