//! Blog service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/blog-service/config.toml)
//! blog-service
//!
//! # Custom config path and port
//! blog-service --config /etc/blog-service/config.toml --port 8080
//!
//! # Validate config without starting
//! blog-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use blog_service::config::AppConfig;
use blog_service::server::{init_tracing, ServerHandle, ServerOptions};

/// Blog backend: articles, comments and rate-limited view counting.
#[derive(Parser, Debug)]
#[command(
    name = "blog-service",
    version,
    about = "Blog backend with rate-limited article view counter",
    long_about = "REST API for a multilingual blog: articles, topics, tags, \
                  guest comments and a per-client rate-limited view counter.\n\n\
                  Default config: ~/.config/blog-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(blog_service::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Overrides go in before tracing so --log-level takes effect
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        config.validate()?;
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Environment : {}", config.environment.as_str());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   View window : {}s", config.views.window_secs);
        println!("   View store  : {:?}", config.views.store);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
