// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含网页对话框的核心业务逻辑，包括：
/// - 领域模型（models）：导航请求、分类结果和错误
/// - 服务（services）：导航分类、失败过滤和委托特质
///
/// 领域层不依赖于任何外部实现，分类逻辑是纯函数。
pub mod models;
pub mod services;
