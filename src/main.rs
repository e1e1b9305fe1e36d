use hostecho::{
    app,
    config::Config,
    error::StartupError,
    utils::{constant::STARTUP_LOG_TARGET, shutdown::shutdown_signal, telemetry},
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    if let Err(e) = run().await {
        error!(error = %e, source = ?std::error::Error::source(&e), "Server terminated");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listen_addr,
            source,
        })?;
    let port = listener.local_addr().map_err(StartupError::Serve)?.port();

    info!(target: STARTUP_LOG_TARGET, "Server running on port {port}");

    axum::serve(listener, app(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("Server stopped");
    Ok(())
}
