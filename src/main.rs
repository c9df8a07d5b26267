use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use portfolio_actix::common::common::{http_check_host_and_port_used, setup_logging};
use portfolio_actix::config::structs::configuration::Configuration;
use portfolio_actix::http::http::http_service;
use portfolio_actix::portfolio::structs::portfolio_tracker::PortfolioTracker;
use portfolio_actix::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(PortfolioTracker::new(config.clone(), args.create_database).await);

            http_check_host_and_port_used(config.http_server.bind_address.clone());
            let address: SocketAddr = match config.http_server.bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[BOOT] Invalid bind_address in config: {error}");
                    exit(1);
                }
            };

            let (handle, server) = http_service(
                address,
                tracker.clone(),
                Arc::new(config.http_server.clone())
            ).await;
            let server_task = tokio::spawn(server);

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Pages: {} - API: {} | Visits: Tracked:{} Dropped:{} | Contacts: OK:{} Rejected:{} | 401:{} 404:{}",
                                stats.page_hits, stats.api_hits,
                                stats.visits_tracked, stats.visits_dropped,
                                stats.contacts_accepted, stats.contacts_rejected,
                                stats.unauthorized, stats.not_found
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                    let _ = server_task.await;
                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
