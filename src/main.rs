use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use home_sections_admin::api::SectionsClient;
use home_sections_admin::app::AdminApp;
use home_sections_admin::config::AdminConfig;

/// Admin panel for homepage banners and cards
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend origin
    #[arg(long, env = "HOME_SECTIONS_API_URL")]
    api_url: Option<String>,

    /// Origin prefixed to relative image paths
    #[arg(long, env = "HOME_SECTIONS_IMAGE_BASE_URL")]
    image_base_url: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match AdminConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(cli.api_url, cli.image_base_url),
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match SectionsClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("🗂️  Home Sections Admin starting against {}", client.endpoint());

    let result = iced::application("Home Sections Admin", AdminApp::update, AdminApp::view)
        .theme(AdminApp::theme)
        .centered()
        .run_with(move || AdminApp::new(config, client));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI error: {}", e);
            ExitCode::FAILURE
        }
    }
}
