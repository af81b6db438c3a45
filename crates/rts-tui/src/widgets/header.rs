//! Header widget — title on the left, keybinding hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

const TITLE: &str = " Real-time search with debouncing ";
const HINT: &str = " F1:help  Esc:quit ";

pub struct Header;

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_string(area.x, area.y, TITLE, Style::default().add_modifier(Modifier::BOLD));

        let hint_x = area.right().saturating_sub(HINT.len() as u16);
        if hint_x > area.x + TITLE.len() as u16 {
            buf.set_string(hint_x, area.y, HINT, Style::default().add_modifier(Modifier::DIM));
        }
    }
}
