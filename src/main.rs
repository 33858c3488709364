use std::sync::Arc;

use clap::Parser;
use tokio::sync::Notify;

mod config;
mod handler;
mod http;
mod logger;
mod server;
mod wol;

#[derive(Parser, Debug)]
#[command(name = "wol-server", version, about = "HTTP trigger for Wake-on-LAN magic packets")]
struct Cli {
    /// Configuration file, extension optional (`config` loads ./config.toml)
    #[arg(short, long, default_value = "config")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::Config::load_from(&cli.config)?;
    logger::init(&cfg)?;

    // Requests are handled one connection task at a time on a single thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let runner = wol::SystemCommandRunner::new(&cfg.wol.command);
    if let Err(e) = wol::preflight(&cfg.wol, &runner).await {
        if let wol::StartupError::ToolNotFound { command } = &e {
            eprintln!("Error: '{command}' command not found. Please install it:");
            eprintln!("  apt install wakeonlan    (Debian/Ubuntu)");
            eprintln!("  pkg install wakeonlan    (Termux)");
        }
        logger::log_error(&format!("Startup check failed: {e}"));
        return Err(e.into());
    }

    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, Arc::new(runner)));
    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    // LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_server(listener, state, shutdown))
        .await
}
