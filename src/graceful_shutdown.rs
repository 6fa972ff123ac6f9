use std::future::{pending, Future};

use derive_more::Display;
use tokio::signal;
use tracing::error;

/// Which OS signal asked the service to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ShutdownReason {
    #[display("Ctrl+C")]
    Interrupt,
    #[display("SIGTERM")]
    Terminate,
}

async fn interrupted() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminated() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            error!("Failed to listen for SIGTERM: {}", e);
            pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminated() {
    pending::<()>().await;
}

async fn first_of<I, T>(interrupt: I, terminate: T) -> ShutdownReason
where
    I: Future<Output = ()>,
    T: Future<Output = ()>,
{
    tokio::select! {
        _ = interrupt => ShutdownReason::Interrupt,
        _ = terminate => ShutdownReason::Terminate,
    }
}

/// Resolves once Ctrl+C or SIGTERM arrives. A listener that cannot be
/// installed never resolves, leaving the other one in charge.
pub async fn shutdown_signal() -> ShutdownReason {
    first_of(interrupted(), terminated()).await
}
