//! Record server entrypoint.
//!
//! Serves the record facade over gRPC and, when an HTTP address is
//! configured and the `http` feature is enabled, over HTTP as well. Both
//! transports share one store. Runs until Ctrl-C or SIGTERM.
use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use student_registry::config::Config;
use student_registry::{logging, microsvc, InMemoryRecordStore, RecordFacade, RecordStore};

#[derive(Parser, Debug)]
#[command(name = "student-server", about = "In-memory student record service")]
struct Args {
    /// gRPC listen address (overrides STUDENTS_GRPC_ADDR).
    #[arg(long)]
    grpc_addr: Option<SocketAddr>,
    /// HTTP listen address (overrides STUDENTS_HTTP_ADDR).
    #[arg(long)]
    http_addr: Option<SocketAddr>,
    /// Start with an empty store instead of the sample students.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    // RUST_LOG may come from .env, so load it before the subscriber.
    dotenvy::dotenv().ok();
    logging::init_tracing();
    let mut config = Config::from_env().context("failed to load configuration")?;

    if let Some(addr) = args.grpc_addr {
        config.grpc_addr = addr;
    }
    if args.http_addr.is_some() {
        config.http_addr = args.http_addr;
    }
    if args.no_seed {
        config.seed = false;
    }

    let store = if config.seed {
        InMemoryRecordStore::with_sample_data().context("failed to seed record store")?
    } else {
        InMemoryRecordStore::new()
    };
    let facade = RecordFacade::new(store);

    tracing::info!(
        grpc_addr = %config.grpc_addr,
        students = facade.store().count()?,
        "starting student record service"
    );

    if let Some(addr) = config.http_addr {
        spawn_http(facade.clone(), addr);
    }

    microsvc::serve_grpc(facade, config.grpc_addr, shutdown_signal())
        .await
        .context("gRPC server terminated unexpectedly")?;

    tracing::info!("server stopped");
    Ok(())
}

#[cfg(feature = "http")]
fn spawn_http<S: RecordStore + 'static>(facade: RecordFacade<S>, addr: SocketAddr) {
    let service = std::sync::Arc::new(microsvc::handlers::register(facade));
    tokio::spawn(async move {
        if let Err(err) = microsvc::serve(service, &addr.to_string()).await {
            tracing::error!(error = %err, "HTTP transport failed");
        }
    });
}

#[cfg(not(feature = "http"))]
fn spawn_http<S: RecordStore + 'static>(_facade: RecordFacade<S>, addr: SocketAddr) {
    tracing::warn!(%addr, "HTTP address configured but the http feature is disabled");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}
