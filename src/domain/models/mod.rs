// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了网页对话框的核心数据结构，包括：
/// - 导航请求（NavigationRequest）：网页视图每次导航尝试的输入
/// - 分类结果（ClassificationOutcome）：对导航请求的唯一判定
/// - 对话框错误（DialogError）与导航失败（NavigationFailure）
pub mod navigation;
