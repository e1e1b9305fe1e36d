#![allow(dead_code)]

use std::sync::Once;

use hostecho::config::Config;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("hostecho=debug")
            .with_test_writer()
            .init();
    });
}

/// Builds a config the way `Config::from_env` would, from explicit variables.
pub fn config_with(vars: &[(&str, &str)]) -> Config {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|name| {
        vars.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    })
    .expect("Test config should be valid")
}

/// Spawns the application and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(config: Config) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, hostecho::app(&config)).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    address
}

/// Spawns the application with no environment configured.
pub async fn spawn_default_app() -> String {
    spawn_app(config_with(&[])).await
}
