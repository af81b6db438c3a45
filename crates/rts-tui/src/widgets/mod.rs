//! Ratatui widgets for the rts TUI.

pub mod header;
pub mod help;
pub mod query_bar;
pub mod results_list;
pub mod status_line;
