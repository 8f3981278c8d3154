// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::domain::services::failure_filter::{
    URL_ERROR_CANCELLED, URL_ERROR_DOMAIN, WEBKIT_ERROR_DOMAIN, WEBKIT_FRAME_LOAD_INTERRUPTED,
};
use crate::domain::services::navigation_classifier::{
    DEFAULT_CANCEL_HOST, DEFAULT_ERROR_DOMAIN, DEFAULT_SCHEME, DEFAULT_UNKNOWN_ERROR_CODE,
};

/// 应用程序配置设置
///
/// 包含服务器、对话框URL协议、导航失败过滤、外部打开器和日志等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 对话框私有URL协议配置
    pub dialog: DialogSettings,
    /// 导航失败过滤配置
    #[serde(default)]
    pub navigation: NavigationSettings,
    /// 外部URL打开器配置
    pub opener: OpenerSettings,
    /// 日志配置
    pub telemetry: TelemetrySettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 对话框URL协议配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DialogSettings {
    /// 私有URL协议名 (例如 fbconnect)
    pub scheme: String,
    /// 保留的取消主机名
    pub cancel_host: String,
    /// 取消URL错误使用的固定错误域
    pub error_domain: String,
    /// error_code 无法解析时使用的哨兵错误码
    pub unknown_error_code: i64,
}

/// 导航失败过滤配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationSettings {
    /// 被视为无害、不向委托转发的导航失败
    #[serde(default = "default_benign_failures")]
    pub benign_failures: Vec<BenignFailureSettings>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            benign_failures: default_benign_failures(),
        }
    }
}

/// 单条无害导航失败配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenignFailureSettings {
    /// 错误域
    pub domain: String,
    /// 错误码
    pub code: i64,
}

fn default_benign_failures() -> Vec<BenignFailureSettings> {
    vec![
        // User cancelled the load
        BenignFailureSettings {
            domain: URL_ERROR_DOMAIN.to_string(),
            code: URL_ERROR_CANCELLED,
        },
        // Frame load interrupted by policy change
        BenignFailureSettings {
            domain: WEBKIT_ERROR_DOMAIN.to_string(),
            code: WEBKIT_FRAME_LOAD_INTERRUPTED,
        },
    ]
}

/// 外部URL打开器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OpenerSettings {
    /// 用于打开外部URL的系统程序
    pub program: String,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// 未设置 RUST_LOG 时使用的过滤指令
    pub filter: String,
    /// 是否输出JSON格式日志
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

/// 默认日志过滤指令
pub const DEFAULT_LOG_FILTER: &str = "info,webdialog=debug";

/// 默认外部打开程序
#[cfg(target_os = "macos")]
pub const DEFAULT_OPENER_PROGRAM: &str = "open";
/// 默认外部打开程序
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_OPENER_PROGRAM: &str = "xdg-open";

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从 `config/` 目录和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config_dir("config")
    }

    /// 从指定配置目录加载配置
    ///
    /// 加载顺序：内置默认值、`{dir}/default`、`{dir}/{APP_ENVIRONMENT}`、
    /// 以 `WEBDIALOG__` 为前缀的环境变量，后者覆盖前者。
    pub fn with_config_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default private scheme contract
            .set_default("dialog.scheme", DEFAULT_SCHEME)?
            .set_default("dialog.cancel_host", DEFAULT_CANCEL_HOST)?
            .set_default("dialog.error_domain", DEFAULT_ERROR_DOMAIN)?
            .set_default("dialog.unknown_error_code", DEFAULT_UNKNOWN_ERROR_CODE)?
            // Default opener settings
            .set_default("opener.program", DEFAULT_OPENER_PROGRAM)?
            // Default telemetry settings
            .set_default("telemetry.filter", DEFAULT_LOG_FILTER)?
            .set_default("telemetry.json", false)?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(&env).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("WEBDIALOG").separator("__"));

        builder.build()?.try_deserialize()
    }
}
