// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::config::settings::NavigationSettings;
use crate::domain::models::navigation::NavigationFailure;

/// URL加载系统的错误域
pub const URL_ERROR_DOMAIN: &str = "NSURLErrorDomain";
/// 用户取消加载
pub const URL_ERROR_CANCELLED: i64 = -999;
/// 网页引擎的错误域
pub const WEBKIT_ERROR_DOMAIN: &str = "WebKitErrorDomain";
/// 帧加载被策略变更中断
pub const WEBKIT_FRAME_LOAD_INTERRUPTED: i64 = 102;

/// 导航失败的处置方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureDisposition {
    /// 无害失败，吞掉不转发
    Suppress,
    /// 原样转发给失败回调
    Forward,
}

/// 导航失败过滤器
///
/// 在失败到达委托之前过滤掉用户取消等无害失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureFilter {
    benign: Vec<(String, i64)>,
}

impl Default for FailureFilter {
    fn default() -> Self {
        Self::from_settings(&NavigationSettings::default())
    }
}

impl FailureFilter {
    pub fn new(benign: Vec<(String, i64)>) -> Self {
        Self { benign }
    }

    /// 从配置创建过滤器
    pub fn from_settings(settings: &NavigationSettings) -> Self {
        Self::new(
            settings
                .benign_failures
                .iter()
                .map(|failure| (failure.domain.clone(), failure.code))
                .collect(),
        )
    }

    /// 失败是否无害
    pub fn is_benign(&self, failure: &NavigationFailure) -> bool {
        self.benign
            .iter()
            .any(|(domain, code)| *domain == failure.domain && *code == failure.code)
    }

    /// 决定失败的处置方式
    pub fn classify_failure(&self, failure: &NavigationFailure) -> FailureDisposition {
        if self.is_benign(failure) {
            FailureDisposition::Suppress
        } else {
            FailureDisposition::Forward
        }
    }
}
