//! Demodbank RPC Server - JSON-RPC status endpoint for a demodulator bank.
//!
//! This binary serves point-in-time snapshots of the channel bank over
//! JSON-RPC 2.0. The bank is normally written by the external DSP pipeline;
//! `--simulate` drives it with a built-in producer thread instead so the
//! server can run standalone.

mod handler;
mod registry;
mod server;
mod sim;

use anyhow::Result;
use clap::Parser;
use demodbank_core::{ChannelBank, MonitorService};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "demodbank-rpc")]
#[command(about = "JSON-RPC status server for a demodulator channel bank")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Number of demodulator channels in the bank
    #[arg(short, long, default_value = "8")]
    channels: usize,

    /// Drive the bank with a simulated producer thread
    #[arg(long)]
    simulate: bool,

    /// Simulated producer tick period in milliseconds
    #[arg(long, default_value = "20")]
    sim_period_ms: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Server starting up");

    // The one shared bank; constructed here and threaded through explicitly.
    let bank = Arc::new(ChannelBank::new(args.channels));

    if args.simulate {
        sim::spawn_producer(
            Arc::clone(&bank),
            Duration::from_millis(args.sim_period_ms),
        )?;
    }

    // Service start time is captured here.
    let service = MonitorService::new(Arc::clone(&bank));

    let addr = server::start_server(service, &args.host, args.port).await?;

    // Print port for supervisors to read (intentional stdout for IPC)
    println!("RPC_PORT={}", addr.port());

    info!("Serving {} channels on {}", args.channels, addr);

    // Runs until the process is killed or the transport shuts down.
    tokio::signal::ctrl_c().await?;
    info!("Server finished");

    Ok(())
}
