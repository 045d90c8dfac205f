//! API 路由模块

mod generate;
mod health;

pub use generate::generate_routes;
pub use health::health_routes;

use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(generate_routes())
        .with_state(state)
}

/// 构建完整应用：路由 + CORS + 请求追踪
///
/// 只接受来自 `allowed_origin` 的跨域请求，该来源下放行所有方法和请求头。
pub fn create_app(state: Arc<AppState>, allowed_origin: &str) -> AppResult<Router> {
    let origin = allowed_origin.parse::<HeaderValue>().map_err(|e| {
        AppError::Config(format!("Invalid CORS origin '{}': {}", allowed_origin, e))
    })?;

    let cors = CorsLayer::new()
        .allow_origin([origin])
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(create_api_routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
