//! Headless mode — one search, printed to a writer.
//!
//! The term goes through the same [`SearchSession`] the TUI uses, debounce
//! included, so an empty term clears instead of fetching and prints nothing.
//! Unlike the interactive widget, a fetch failure is not swallowed here: the
//! error recorded in the view is returned to the caller.

use anyhow::Context;
use rts_core::User;
use rts_fetch::SearchSession;
use std::io::Write;

/// Output format for headless results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `name (email)` per line.
    #[default]
    Text,
    /// One JSON object per line.
    Jsonl,
}

/// Run `term` through `session`, wait for the outcome, and write the
/// results to `out`. Returns the number of results written.
pub async fn run<W: Write>(
    session: &mut SearchSession,
    term: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<usize> {
    let mut rx = session.subscribe();
    let before = rx.borrow_and_update().completed;

    session.input(term);
    if term.is_empty() {
        rx.changed().await.context("search session closed")?;
    } else {
        rx.wait_for(|v| v.completed > before)
            .await
            .context("search session closed")?;
    }

    let view = session.view();
    if let Some(err) = view.last_error {
        return Err(err).with_context(|| format!("search for {term:?} failed"));
    }

    tracing::info!(term, results = view.results.len(), "headless search done");
    for user in &view.results {
        write_user(out, user, format)?;
    }
    out.flush()?;
    Ok(view.results.len())
}

fn write_user<W: Write>(out: &mut W, user: &User, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{user}")?,
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *out, user)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
