//! Shutdown signal handling.
//!
//! Each binary spawns [`listen`] next to its server; the first interrupt or
//! terminate signal switches the server into a graceful drain through its
//! [`ServerHandle`].

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// A signal handler could not be installed.
#[derive(Debug, Error)]
#[error("failed to install {signal} handler")]
pub struct ShutdownSignalError {
    signal: &'static str,
    #[source]
    source: io::Error,
}

impl ShutdownSignalError {
    fn new(signal: &'static str, source: io::Error) -> Self {
        Self { signal, source }
    }
}

/// Wait for an interrupt or terminate signal, then drain the server.
///
/// # Errors
///
/// Returns an error when a signal handler cannot be installed; the caller
/// logs it and the server keeps running without graceful shutdown.
pub async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .map_err(|source| ShutdownSignalError::new("SIGINT", source))
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(|source| ShutdownSignalError::new("SIGTERM", source))?
            .recv()
            .await;

        Ok::<(), ShutdownSignalError>(())
    };

    #[cfg(windows)]
    let terminate = async {
        signal::windows::ctrl_c()
            .map_err(|source| ShutdownSignalError::new("Ctrl+C", source))?
            .recv()
            .await;

        Ok::<(), ShutdownSignalError>(())
    };

    tokio::select! {
        result = interrupt => {
            result?;
            info!("interrupt received, draining connections");
        }
        result = terminate => {
            result?;
            info!("terminate received, draining connections");
        }
    }

    handle.stop_graceful(None);

    Ok(())
}
