//! Start the Realty server.

use clap::Args;

use realty_core::config::AppConfig;
use realty_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Realty server...");
    crate::output::print_kv("Host", &config.server.host);
    crate::output::print_kv("Port", &config.server.port.to_string());
    crate::output::print_kv("Database", &config.database.provider.to_string());

    realty_api::run_server(config).await
}
