//! rts TUI — ratatui application shell around a [`SearchSession`].

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use rts_core::config::Config;
use rts_fetch::SearchSession;

/// Start the TUI against the configured endpoint.
///
/// Builds the Tokio runtime that hosts debounce timers and fetches, enters
/// it, and runs the terminal loop on the calling thread.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    let session = SearchSession::from_config(&config.search);
    let theme = theme::Theme::by_name(&config.ui.theme);
    App::new(session, config, theme).run()
}
