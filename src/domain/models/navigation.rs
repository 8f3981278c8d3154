// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use url::Url;

/// 对话框完成时交付给委托的结果映射
pub type DialogResults = BTreeMap<String, String>;

/// 导航类型枚举
///
/// 由承载网页的视图为每次导航提供。只有用户点击链接被视为用户激活，
/// 其余原因（表单提交、脚本重定向、刷新等）一律视为非激活。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NavigationType {
    /// 用户点击链接
    LinkActivated,
    /// 表单提交
    FormSubmitted,
    /// 前进/后退
    BackForward,
    /// 重新加载
    Reload,
    /// 表单重新提交
    FormResubmitted,
    /// 其他原因（脚本、重定向等）
    #[default]
    Other,
}

impl NavigationType {
    /// 是否为用户激活的链接导航
    pub fn is_user_activated(self) -> bool {
        matches!(self, NavigationType::LinkActivated)
    }
}

/// 导航请求
///
/// 每次导航尝试构造一次，构造后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    url: Url,
    navigation_type: NavigationType,
}

impl NavigationRequest {
    /// 创建导航请求
    pub fn new(url: Url, navigation_type: NavigationType) -> Self {
        Self {
            url,
            navigation_type,
        }
    }

    /// 创建用户点击链接触发的导航请求
    pub fn link_activated(url: Url) -> Self {
        Self::new(url, NavigationType::LinkActivated)
    }

    /// 创建非用户激活的导航请求
    pub fn other(url: Url) -> Self {
        Self::new(url, NavigationType::Other)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn navigation_type(&self) -> NavigationType {
        self.navigation_type
    }

    pub fn is_user_activated_link(&self) -> bool {
        self.navigation_type.is_user_activated()
    }
}

/// 导航策略
///
/// 交给网页视图决策回调的最终结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPolicy {
    /// 允许导航继续
    Allow,
    /// 取消导航
    Cancel,
}

/// 对话框错误
///
/// 通过委托的失败回调交付，既可来自取消URL携带的错误参数，
/// 也可来自网页引擎报告的导航失败。
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{domain} ({code}): {message}")]
pub struct DialogError {
    /// 错误域
    pub domain: String,
    /// 错误码
    pub code: i64,
    /// 错误描述
    pub message: String,
}

impl DialogError {
    pub fn new(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }
}

/// 网页引擎报告的导航失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFailure {
    /// 引擎错误域
    pub domain: String,
    /// 引擎错误码
    pub code: i64,
    /// 引擎给出的描述
    pub description: String,
}

impl NavigationFailure {
    pub fn new(domain: impl Into<String>, code: i64, description: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            description: description.into(),
        }
    }
}

impl From<NavigationFailure> for DialogError {
    fn from(failure: NavigationFailure) -> Self {
        DialogError::new(failure.domain, failure.code, failure.description)
    }
}

/// 导航分类结果
///
/// 每个导航请求恰好产生一个结果。除 `Allow` 外，所有结果都意味着取消导航。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// 允许导航，无副作用
    Allow,
    /// 取消导航并把结果交付给完成回调
    CompleteWithResults(DialogResults),
    /// 取消导航并把错误交付给失败回调
    FailWithError(DialogError),
    /// 取消导航并通知取消回调
    Cancel,
    /// 取消导航并交给外部打开器
    OpenExternally(Url),
}

impl ClassificationOutcome {
    /// 该结果对应的导航策略
    pub fn policy(&self) -> NavigationPolicy {
        match self {
            ClassificationOutcome::Allow => NavigationPolicy::Allow,
            _ => NavigationPolicy::Cancel,
        }
    }

    /// 结果名称，用于日志和序列化
    pub fn name(&self) -> &'static str {
        match self {
            ClassificationOutcome::Allow => "allow",
            ClassificationOutcome::CompleteWithResults(_) => "complete_with_results",
            ClassificationOutcome::FailWithError(_) => "fail_with_error",
            ClassificationOutcome::Cancel => "cancel",
            ClassificationOutcome::OpenExternally(_) => "open_externally",
        }
    }
}

impl fmt::Display for ClassificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
