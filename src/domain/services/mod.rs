// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 导航分类器（navigation_classifier）：对每次导航做出唯一判定
/// - 失败过滤器（failure_filter）：过滤网页引擎报告的无害失败
/// - 对话框委托（dialog_delegate）：宿主需要实现的回调特质
pub mod dialog_delegate;
pub mod failure_filter;
pub mod navigation_classifier;
