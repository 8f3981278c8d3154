// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::settings::Settings;
use crate::domain::services::failure_filter::FailureFilter;
use crate::domain::services::navigation_classifier::NavigationClassifier;
use crate::presentation::handlers::navigation_handler;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载状态的路由，处理器所需的扩展由 [`build_router`] 注入
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let navigation_routes = Router::new()
        .route(
            "/v1/navigation/classify",
            post(navigation_handler::classify_navigation),
        )
        .route(
            "/v1/navigation/failure",
            post(navigation_handler::filter_navigation_failure),
        );

    Router::new().merge(public_routes).merge(navigation_routes)
}

/// 按配置组装完整的应用路由
pub fn build_router(settings: &Settings) -> Router {
    let classifier = Arc::new(NavigationClassifier::from_settings(&settings.dialog));
    let failure_filter = Arc::new(FailureFilter::from_settings(&settings.navigation));

    routes()
        .layer(Extension(classifier))
        .layer(Extension(failure_filter))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
