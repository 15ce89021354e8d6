use clap::Parser;
use reel::ResultsLayout;
use reel::core::config::{self, CliOverrides};
use reel::core::theme::Theme;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "reel", about = "Movie recommendations in your terminal")]
struct Args {
    /// Base URL of the recommendation service
    #[arg(long)]
    api_url: Option<String>,

    /// Endpoint path appended to the base URL
    #[arg(long)]
    path: Option<String>,

    /// Starting theme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Starting results layout
    #[arg(short, long, value_enum)]
    layout: Option<ResultsLayout>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to reel.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("reel.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let overrides = CliOverrides {
        base_url: args.api_url,
        path: args.path,
        theme: args.theme,
        layout: args.layout,
    };
    let resolved = config::resolve(&file_config, &overrides);

    log::info!("Reel starting up against {}", resolved.endpoint());

    reel::tui::run(resolved)
}
