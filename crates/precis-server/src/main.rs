//! Precis HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use precis::config::Config;
use precis::{
    Embedder, GrammarChecker, LanguageToolChecker, LeadSummarizer, RuleBasedChecker,
    ScoringPipeline, SentenceConfig, SentenceEmbedder, SummaryGenerator,
};
use precis_server::gateway::{GenAiSummarizer, HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
██████╗ ██████╗ ███████╗ ██████╗██╗███████╗
██╔══██╗██╔══██╗██╔════╝██╔════╝██║██╔════╝
██████╔╝██████╔╝█████╗  ██║     ██║███████╗
██╔═══╝ ██╔══██╗██╔══╝  ██║     ██║╚════██║
██║     ██║  ██║███████╗╚██████╗██║███████║
╚═╝     ╚═╝  ╚═╝╚══════╝ ╚═════╝╚═╝╚══════╝

        READ. SUMMARIZE. SCORE.
                                   AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Precis starting"
    );

    let pipeline = build_pipeline(&config)?;
    tracing::info!(
        embedder = pipeline.embedder_mode(),
        summarizer = pipeline.summarizer_mode(),
        grammar = pipeline.grammar_mode(),
        "Scoring pipeline ready"
    );

    let app = create_router_with_state(HandlerState::new(pipeline));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Precis shutdown complete");
    Ok(())
}

fn build_pipeline(config: &Config) -> anyhow::Result<ScoringPipeline> {
    let sentence_config = if let Some(path) = &config.embedder_path {
        SentenceConfig::new(path.clone())
    } else {
        tracing::warn!("No PRECIS_EMBEDDER_PATH configured, running embedder in stub mode");
        SentenceConfig::stub()
    };
    let embedder: Arc<dyn Embedder> = Arc::new(SentenceEmbedder::load(sentence_config)?);

    let summarizer: Arc<dyn SummaryGenerator> = if config.mock_provider {
        tracing::warn!("PRECIS_MOCK_PROVIDER set, using extractive lead summarizer");
        Arc::new(LeadSummarizer::default())
    } else {
        Arc::new(GenAiSummarizer::new(config.summary_model.clone()))
    };

    let grammar: Arc<dyn GrammarChecker> = if let Some(url) = &config.grammar_url {
        Arc::new(LanguageToolChecker::new(
            url,
            config.grammar_language.clone(),
            config.grammar_timeout,
        )?)
    } else {
        tracing::warn!("No PRECIS_GRAMMAR_URL configured, using rule-based grammar checker");
        Arc::new(RuleBasedChecker::new())
    };

    Ok(ScoringPipeline::new(embedder, summarizer, grammar))
}

fn run_health_check() -> i32 {
    let port = std::env::var("PRECIS_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
