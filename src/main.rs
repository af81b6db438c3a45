use clap::Parser;
use rts::headless::{self, OutputFormat};
use rts::{Config, SearchSession, StalePolicy};

#[derive(Parser)]
#[command(name = "rts", about = "Real-time user search — debounced lookup as you type")]
struct Cli {
    /// Write debug logs to /tmp/rts-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// URL returning the user collection as a JSON array.
    #[arg(long)]
    endpoint: Option<String>,

    /// Keystroke debounce window in milliseconds.
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Ignore responses that arrive after a newer search was issued.
    #[arg(long)]
    discard_stale: bool,

    /// Run one search without the TUI and print the results.
    #[arg(long)]
    query: Option<String>,

    /// Output format for --query.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/rts-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("rts debug log started — tail -f /tmp/rts-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load config, using defaults");
        Config::defaults()
    });
    if let Some(endpoint) = cli.endpoint {
        config.search.endpoint = endpoint;
    }
    if let Some(ms) = cli.debounce_ms {
        config.search.debounce_ms = ms;
    }
    if cli.discard_stale {
        config.search.stale_responses = StalePolicy::Discard;
    }

    match cli.query {
        Some(term) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(async {
                let mut session = SearchSession::from_config(&config.search);
                let mut stdout = std::io::stdout().lock();
                headless::run(&mut session, &term, cli.format, &mut stdout).await
            })?;
            Ok(())
        }
        None => rts_tui::run(config),
    }
}
