use clap::Parser;
use jsx_dns_domain::config::{CliOverrides, TransportMode};
use jsx_dns_jobs::JobRunner;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "jsx-dns")]
#[command(version)]
#[command(about = "jsx-dns - authoritative and forwarding DNS server with a deny-list sinkhole")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long, env = "PORT")]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, env = "BIND")]
    bind: Option<String>,

    /// Directory holding the zone JSON files
    #[arg(long, value_name = "DIR")]
    zones_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        zones_directory: cli.zones_dir,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting jsx-dns v{}", env!("CARGO_PKG_VERSION"));

    let shared = di::SharedResources::load(&config).await?;
    let udp = di::DnsServices::new(&config, &shared, TransportMode::Udp);
    let tcp = di::DnsServices::new(&config, &shared, TransportMode::Tcp);

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_cache_sweep(udp.cache_sweep)
        .with_cache_sweep(tcp.cache_sweep)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let bind_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.dns_port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let mut dns_server = tokio::spawn(server::start_dns_server(
        bind_addr,
        udp.handler,
        tcp.handler,
        shutdown.clone(),
    ));

    // Listener startup failures end the process without waiting for a signal.
    let stopped_early = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
            }
            None
        }
        result = &mut dns_server => Some(result),
    };

    shutdown.cancel();
    match stopped_early {
        Some(result) => result??,
        None => dns_server.await??,
    }

    info!("Server shutdown complete");
    Ok(())
}
