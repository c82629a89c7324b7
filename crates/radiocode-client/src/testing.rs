//! Test utilities for radiocode-client
//!
//! Provides an in-process mock service so integration tests can drive the
//! real client over real HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::{RadioCodeClient, Result};

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: RadioCodeClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Start `router` on an ephemeral port and return a client pointed at
    /// it, configured with `activation_key`.
    pub async fn start(router: axum::Router, activation_key: &str) -> Result<Self> {
        Self::start_with_timeout(
            router,
            activation_key,
            Duration::from_secs(5),
            Duration::from_secs(2),
        )
        .await
    }

    /// Start a test server with custom client timeouts
    pub async fn start_with_timeout(
        router: axum::Router,
        activation_key: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        let base_url = format!("http://{}", addr);
        let client =
            RadioCodeClient::with_config(&base_url, activation_key, timeout, connect_timeout)?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Reference to the client pointed at this server
    pub fn client(&self) -> &RadioCodeClient {
        &self.client
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
