use axum::Router;
use axum::extract::Extension;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::source::SampleSource;

/// High-level runtime that serves an Axum router backed by a shared [`SampleSource`].
pub struct FlightMockRuntime {
    config: ServiceConfig,
}

impl FlightMockRuntime {
    /// Creates a runtime with the provided configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the runtime and starts serving the supplied router.
    pub async fn serve(self, router: Router) -> Result<()> {
        serve(router, self.config).await
    }
}

/// Serves the router with the provided configuration.
pub async fn serve(router: Router, config: ServiceConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        batch_size = config.batch_size,
        include_alerts = config.include_alerts,
        seeded = config.seed.is_some(),
        "flightmock listening"
    );

    let source = SampleSource::from_config(&config);
    let router = router.layer(Extension(source));
    let service = router.into_make_service();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("flightmock stopped");
    Ok(())
}

/// Loads [`ServiceConfig`] from the environment and starts serving the router.
pub async fn run(router: Router) -> Result<()> {
    let config = ServiceConfig::from_env()?;
    serve(router, config).await
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("shutdown signal received");
}
