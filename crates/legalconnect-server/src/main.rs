mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use legalconnect_api::answer::{AnswerSource, OpenAiAnswerSource};
use legalconnect_api::routes;
use legalconnect_api::service::ChatService;
use legalconnect_api::state::AppStateInner;
use legalconnect_db::MemStorage;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legalconnect_server=debug,legalconnect_api=debug,legalconnect_db=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let store = Arc::new(MemStorage::new());

    let source: Option<Arc<dyn AnswerSource>> = match config.llm {
        Some(llm) => {
            info!("Live answers enabled via {} ({})", llm.base_url, llm.model);
            let live: Arc<dyn AnswerSource> = Arc::new(OpenAiAnswerSource::new(llm)?);
            Some(live)
        }
        None => {
            info!("OPENAI_API_KEY not set, answering from offline library");
            None
        }
    };

    let chat = ChatService::new(store.clone(), source);
    let state = AppStateInner::new(store, chat);

    let app = routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("LegalConnect server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
