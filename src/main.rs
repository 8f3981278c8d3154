// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tokio::net::TcpListener;
use tracing::info;
use webdialog::config::settings::Settings;
use webdialog::presentation::routes;
use webdialog::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责加载配置、初始化日志并启动导航分类服务。
/// 服务只返回分类决定，从不打开外部URL，因此不使用 `opener` 配置段。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry_with(&settings.telemetry);
    info!("Starting webdialog...");
    info!(
        scheme = %settings.dialog.scheme,
        cancel_host = %settings.dialog.cancel_host,
        "Configuration loaded"
    );

    // 3. Start HTTP server
    let app = routes::build_router(&settings);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
