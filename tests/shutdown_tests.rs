//! Graceful shutdown of the production server path.
//!
//! SIGTERM is process-wide, so this lives in its own test binary with a
//! single test.
//!
//! Run with: cargo test --test shutdown_tests
#![cfg(unix)]

use std::process::Command;
use std::time::Duration;

use hello_docker::config::AppConfig;
use hello_docker::create_router;
use hello_docker::http::start_server;
use tokio::signal::unix::{signal, SignalKind};

fn send_sigterm_to_self() {
    let status = Command::new("kill")
        .args(["-TERM", &std::process::id().to_string()])
        .status()
        .expect("run kill");
    assert!(status.success());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn sigterm_stops_server_gracefully() {
    // Registering a listener replaces the default SIGTERM disposition, so the
    // test process survives a signal sent before the server's own handler is up.
    let _guard = signal(SignalKind::terminate()).expect("install SIGTERM listener");

    let mut config = AppConfig::default();
    config.http.host = "127.0.0.1".to_string();
    config.http.port = 0;
    config.http.shutdown_timeout_seconds = 1;

    let server = tokio::spawn(async move { start_server(create_router(), &config).await });

    // Keep signalling until the server's handler has been installed and fires
    let result = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            tokio::time::sleep(Duration::from_millis(100)).await;
            send_sigterm_to_self();
            if server.is_finished() {
                break;
            }
        }
        server.await
    })
    .await
    .expect("server did not shut down within 5s");

    let outcome = result.expect("server task panicked");
    assert!(outcome.is_ok(), "server returned {:?}", outcome.err());
}
