// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含网页对话框控制器和数据传输对象。
/// [`application::web_dialog::WebDialogView`] 是供宿主嵌入的库接口，
/// HTTP 服务只暴露分类决定，不驱动它。
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含导航请求、分类结果和导航分类器
pub mod domain;

/// 基础设施模块
///
/// 提供外部URL打开等系统集成。
/// [`infrastructure::url_opener::CommandUrlOpener`] 由嵌入
/// [`application::web_dialog::WebDialogView`] 的宿主使用，`opener` 配置段只对它生效。
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
