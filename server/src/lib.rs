//! Task Chat Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - llm: Chat provider client
//! - handlers: axum HTTP handlers

pub mod config;
pub mod domain;
pub mod handlers;
pub mod llm;
pub mod repository;

use std::sync::Arc;

use config::{Cli, ServerConfig};
use handlers::AppState;
use llm::OpenAiCompatClient;
use repository::InMemoryTaskRepository;

/// Wire the configured dependencies into the application router
pub fn build_app(cli: &Cli, server: &ServerConfig) -> anyhow::Result<axum::Router> {
    let tasks = if server.seed_tasks {
        InMemoryTaskRepository::seeded()
    } else {
        InMemoryTaskRepository::new()
    };

    let chat_config = cli.chat_config();
    if chat_config.api_key.is_none() {
        log::warn!("DASHSCOPE_API_KEY is not set; chat requests will fail");
    }
    let chat = OpenAiCompatClient::new(chat_config)?;
    log::info!("Chat relay using model {}", chat.model());

    let state = AppState::new(Arc::new(tasks), Arc::new(chat));
    Ok(handlers::router(state, server.static_dir.clone()))
}

/// Bind and serve until the process is stopped
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let server = cli.server_config()?;
    let app = build_app(&cli, &server)?;

    let listener = tokio::net::TcpListener::bind(server.addr).await?;
    log::info!("Listening on http://{}", server.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
