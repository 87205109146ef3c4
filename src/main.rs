use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio::sync::mpsc;

use understand::config::Config;
use understand::logging::{init_tracing, LogTarget};
use understand::ui::app::App;
use understand::ui::events::{AppEvent, EventHandler};
use understand::upload::{run_worker, SelectedFile, SummarizeClient, UPLOAD_QUEUE_CAPACITY};

#[derive(Parser, Debug)]
#[command(name = "understand", version, about = "Upload a PDF and read its summary")]
struct Cli {
    /// File to preselect for upload
    file: Option<PathBuf>,

    /// Summarization endpoint URL (overrides config)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upload FILE once, print the summary and exit
    #[arg(long)]
    no_tui: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(if cli.no_tui {
        LogTarget::Headless
    } else {
        LogTarget::Tui
    });

    let config = load_config(&cli)?;
    tracing::info!(endpoint = %config.endpoint.url, "Configuration loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.no_tui {
        let code = runtime.block_on(understand::headless::run(
            &config,
            cli.file.as_deref(),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        ));
        return Ok(ExitCode::from(code));
    }

    let mut app = App::new(&config);
    if let Some(path) = cli.file {
        app.select_file(SelectedFile::from_path(path));
    }

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let client = SummarizeClient::new(config.endpoint.url.clone())
        .context("Failed to create HTTP client")?;
    let (upload_tx, upload_rx) = mpsc::channel(UPLOAD_QUEUE_CAPACITY);
    let event_tx = events.sender();
    runtime.spawn(run_worker(client, upload_rx, move |outcome| {
        let _ = event_tx.send(AppEvent::UploadFinished(outcome));
    }));
    app.set_upload_sender(upload_tx);

    understand::ui::runtime::run(&mut app, &events, tick_rate)
        .context("Terminal UI failed")?;

    // In-flight uploads are abandoned on quit.
    runtime.shutdown_background();
    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    match &cli.endpoint {
        Some(url) => Ok(config.with_endpoint(url.clone())?),
        None => Ok(config),
    }
}
