use clap::Parser;
use growthcast::{App, init_logging};
use growthcast_api::ForecastClient;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "growthcast")]
#[command(about = "A terminal front end for the growth-forecast service")]
struct Args {
    /// Base URL of the forecast service
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    server_url: String,

    /// Forecast scenario to edit
    #[arg(long, default_value_t = 1)]
    scenario_id: u64,

    /// Path to the data directory (default: ~/.growthcast/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".growthcast")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    let client = ForecastClient::new(args.server_url, args.scenario_id)?;
    let mut app = App::new(client);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
