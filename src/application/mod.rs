// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含网页对话框控制器和对外接口的数据传输对象
/// 该模块协调领域服务，把导航回调转换为委托调用
pub mod dto;
pub mod web_dialog;
