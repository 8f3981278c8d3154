// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层抽象接口的具体实现：
/// - URL打开器（url_opener）：通过系统命令在对话框之外打开URL
pub mod url_opener;
