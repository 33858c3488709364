// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections and serve each on its own local task
///
/// Must run inside a `LocalSet`. Returns once `shutdown` is notified;
/// connections already being served are left to finish on their tasks.
pub async fn run_server(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_listener;
    use crate::wol::testing::{Behavior, FakeRunner};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    /// Write one request and read until the server closes the connection
    async fn roundtrip(addr: std::net::SocketAddr, request: &[u8]) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request).await.unwrap();
        let mut buf = Vec::new();
        tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut buf))
            .await
            .expect("server kept the connection open")
            .unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_serves_requests_until_shutdown() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
                let addr = listener.local_addr().unwrap();
                let runner = FakeRunner::succeeding();
                let state = Arc::new(AppState::new(Config::default(), runner.clone()));
                let shutdown = Arc::new(Notify::new());

                let server =
                    tokio::task::spawn_local(run_server(listener, state, Arc::clone(&shutdown)));

                let status = roundtrip(
                    addr,
                    b"GET /status HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
                )
                .await;
                assert!(status.starts_with("HTTP/1.1 200 OK"), "{status}");
                assert!(status.contains("access-control-allow-origin: *"));
                assert!(status.contains("\"status\": \"online\""));

                let wake = roundtrip(
                    addr,
                    b"GET /wol HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
                )
                .await;
                assert!(wake.starts_with("HTTP/1.1 200 OK"), "{wake}");
                assert!(wake.contains("Magic packet sent to 2C:F0:5D:57:5C:63"));
                assert_eq!(runner.call_count(), 1);

                let missing = roundtrip(
                    addr,
                    b"GET /missing HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
                )
                .await;
                assert!(missing.starts_with("HTTP/1.1 404 Not Found"), "{missing}");

                shutdown.notify_one();
                server.await.unwrap().unwrap();
            })
            .await;
    }

    #[tokio::test]
    async fn test_slow_wake_outlives_connection_timeout() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
                let addr = listener.local_addr().unwrap();
                let runner = FakeRunner::new(Behavior::Slow(Duration::from_millis(1500)));
                let mut config = Config::default();
                config.server.connection_timeout = 1;
                let state = Arc::new(AppState::new(config, runner.clone()));
                let shutdown = Arc::new(Notify::new());

                let server =
                    tokio::task::spawn_local(run_server(listener, state, Arc::clone(&shutdown)));

                // No `Connection: close`: the server still answers once and hangs up
                let status =
                    roundtrip(addr, b"GET /status HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
                assert!(status.starts_with("HTTP/1.1 200 OK"), "{status}");

                let wake =
                    roundtrip(addr, b"GET /wol HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
                assert!(wake.starts_with("HTTP/1.1 200 OK"), "{wake}");
                assert!(wake.contains("Magic packet sent to 2C:F0:5D:57:5C:63"));
                assert_eq!(runner.call_count(), 1);

                shutdown.notify_one();
                server.await.unwrap().unwrap();
            })
            .await;
    }
}
