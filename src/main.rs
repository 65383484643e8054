// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
//
// Binary entry point: parse arguments, set up logging, run the workers until
// Ctrl-C.

use clap::Parser;
use ducos1_miner::{
    core::types::Args,
    miner::{MinerSupervisor, Shutdown},
    pool::PoolEndpoint,
    utils::logging::init_logging,
    Result,
};
use log::{error, info};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    init_logging(args.log_level, args.log_file.as_deref())?;

    info!("🚀 Starting DUCO-S1 Miner v{}", env!("CARGO_PKG_VERSION"));
    info!("👷 User: {}", args.username);
    info!("🎯 Difficulty: {}", args.difficulty);
    info!("🧵 Workers: {}", args.worker_count());

    let config = args.into_config()?;
    match &config.endpoint {
        PoolEndpoint::Static { host, port } => info!("📍 Pool: {}:{}", host, port),
        PoolEndpoint::Discovery(locator) => info!("📍 Pool: discovered via {}", locator.config().url),
    }

    let shutdown = Shutdown::new();
    let supervisor = Arc::new(MinerSupervisor::new(config, shutdown.clone()));

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("🛑 Ctrl-C received, stopping workers");
                signal_shutdown.trigger();
            }
            Err(e) => error!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    supervisor.run().await
}
