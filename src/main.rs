//! Movie Trivia Question Generator - Rust Backend
//!
//! 使用 axum 框架构建的后端服务：把用户给出的主题转发给 LLM，生成并校验选择题。

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;

use api::create_app;
use config::AppConfig;
use llm::LlmClient;
use state::create_shared_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载本地 .env（不存在时忽略）
    dotenv::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia_qgen=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting trivia question generator...");

    // 缺少 API 密钥时直接拒绝启动
    let config = AppConfig::from_env().context("failed to load configuration")?;

    let client = LlmClient::new(
        config.api_key.clone(),
        &config.base_url,
        config.model.clone(),
        Duration::from_secs(config.timeout_secs),
    )
    .context("failed to build LLM client")?;

    info!(
        "Upstream: endpoint={}, model={}, api_key={}, timeout={}s",
        client.endpoint(),
        client.model(),
        config.masked_api_key(),
        config.timeout_secs
    );

    let state = create_shared_state(Arc::new(client));
    let app = create_app(state, &config.allowed_origin)?;
    info!("CORS allowed origin: {}", config.allowed_origin);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Server listening on: {}", config.bind_addr);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
