use clap::Parser;
use color_eyre::eyre::Result;
use std::path::PathBuf;
use stocklens_tui::App;
use stocklens_tui::fixtures;
use stocklens_tui::init_terminal;
use stocklens_tui::restore_terminal;
use tracing_subscriber::EnvFilter;

/// Interactive search over the inventory dashboard's record collections.
#[derive(Debug, Parser)]
#[command(name = "stocklens-tui", version)]
struct Cli {
    /// Directory holding JSON fixtures for the six source collections.
    /// When omitted, a small built-in sample is used.
    #[arg(long, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Durable slot for recent searches.
    #[arg(long, value_name = "FILE", default_value = "stocklens-history.json")]
    history_file: PathBuf,

    /// Log file. The terminal itself is owned by the UI, so logs never
    /// go to stderr while the app runs.
    #[arg(long, value_name = "FILE", default_value = "stocklens-tui.log")]
    log_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_dir = cli.log_file.parent().map(PathBuf::from).unwrap_or_default();
    let log_name = cli
        .log_file
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("stocklens-tui.log"));
    let appender = tracing_appender::rolling::never(log_dir, log_name);
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let sources = match &cli.data {
        Some(dir) => fixtures::load_sources(dir)?,
        None => fixtures::sample_sources(),
    };

    let mut tui = init_terminal()?;
    let result = App::run(&mut tui, sources, cli.history_file).await;
    restore_terminal()?;
    result
}
