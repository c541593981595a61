//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use precis::mock::FixedSummarizer;
use precis::{
    GrammarChecker, LeadSummarizer, RuleBasedChecker, ScoringPipeline, SentenceConfig,
    SentenceEmbedder, SummaryGenerator,
};
use precis_server::gateway::{HandlerState, create_router_with_state};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    pub port: u16,
    /// Fixed reference summary; `None` uses the extractive lead summarizer.
    pub reference_summary: Option<String>,
}

impl TestServerConfig {
    pub fn with_reference_summary(mut self, summary: impl Into<String>) -> Self {
        self.reference_summary = Some(summary.into());
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server with every collaborator running locally.
///
/// | Component  | Used here                                      |
/// |------------|------------------------------------------------|
/// | Embedder   | Stub (hashed bag of words)                     |
/// | Summarizer | Lead summarizer, or a fixed reference summary  |
/// | Grammar    | Rule-based checker                             |
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let port = if config.port == 0 {
        find_available_port().await?
    } else {
        config.port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let embedder = SentenceEmbedder::load(SentenceConfig::stub())
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let summarizer: Arc<dyn SummaryGenerator> = match config.reference_summary {
        Some(summary) => Arc::new(FixedSummarizer::new(summary)),
        None => Arc::new(LeadSummarizer::default()),
    };
    let grammar: Arc<dyn GrammarChecker> = Arc::new(RuleBasedChecker::new());

    let pipeline = ScoringPipeline::new(Arc::new(embedder), summarizer, grammar);
    let app = create_router_with_state(HandlerState::new(pipeline));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
