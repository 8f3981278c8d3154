// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{debug, warn};
use url::Url;

use crate::config::settings::DialogSettings;
use crate::domain::models::navigation::{
    ClassificationOutcome, DialogError, DialogResults, NavigationPolicy, NavigationRequest,
};
use crate::utils::query::parse_query;

/// 默认私有URL协议
pub const DEFAULT_SCHEME: &str = "fbconnect";
/// 默认保留的取消主机名
pub const DEFAULT_CANCEL_HOST: &str = "cancel";
/// 取消URL错误的默认固定错误域
pub const DEFAULT_ERROR_DOMAIN: &str = "com.facebook.sdk.core";
/// error_code 无法解析时的默认哨兵错误码
pub const DEFAULT_UNKNOWN_ERROR_CODE: i64 = 3;

const ERROR_CODE_KEY: &str = "error_code";
const ERROR_MESSAGE_KEY: &str = "error_message";

/// 导航策略分类器
///
/// 把每次导航请求映射为唯一的 [`ClassificationOutcome`]。
/// 规则按顺序匹配，先匹配者生效：
///
/// 1. 私有协议 + 取消主机：携带 `error_code` 和 `error_message` 时
///    为 `FailWithError`，否则为 `Cancel`
/// 2. 私有协议 + 其他主机：查询参数与片段参数合并为 `CompleteWithResults`
/// 3. 用户点击链接：`OpenExternally`
/// 4. 其他：`Allow`
///
/// 分类器不做任何I/O，也不持有可变状态，可在任意线程重复调用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationClassifier {
    scheme: String,
    cancel_host: String,
    error_domain: String,
    unknown_error_code: i64,
}

impl Default for NavigationClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_SCHEME,
            DEFAULT_CANCEL_HOST,
            DEFAULT_ERROR_DOMAIN,
            DEFAULT_UNKNOWN_ERROR_CODE,
        )
    }
}

impl NavigationClassifier {
    /// 创建新的分类器
    ///
    /// # 参数
    ///
    /// * `scheme` - 私有URL协议名
    /// * `cancel_host` - 保留的取消主机名
    /// * `error_domain` - 取消URL错误使用的固定错误域
    /// * `unknown_error_code` - error_code 非数字时使用的哨兵错误码
    pub fn new(
        scheme: impl Into<String>,
        cancel_host: impl Into<String>,
        error_domain: impl Into<String>,
        unknown_error_code: i64,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            cancel_host: cancel_host.into(),
            error_domain: error_domain.into(),
            unknown_error_code,
        }
    }

    /// 从配置创建分类器
    pub fn from_settings(settings: &DialogSettings) -> Self {
        Self::new(
            settings.scheme.as_str(),
            settings.cancel_host.as_str(),
            settings.error_domain.as_str(),
            settings.unknown_error_code,
        )
    }

    /// 对导航请求进行分类
    pub fn classify(&self, request: &NavigationRequest) -> ClassificationOutcome {
        let url = request.url();

        let outcome = if self.is_private_scheme(url) {
            if self.is_cancel_host(url) {
                self.classify_cancel(url)
            } else {
                ClassificationOutcome::CompleteWithResults(connect_results(url))
            }
        } else if request.is_user_activated_link() {
            ClassificationOutcome::OpenExternally(url.clone())
        } else {
            ClassificationOutcome::Allow
        };

        debug!(
            url = %url,
            navigation_type = ?request.navigation_type(),
            outcome = %outcome,
            "Classified navigation"
        );
        outcome
    }

    /// 分类并返回对应的导航策略
    ///
    /// 除 `Allow` 外策略总是 `Cancel`。
    pub fn decide(&self, request: &NavigationRequest) -> (ClassificationOutcome, NavigationPolicy) {
        let outcome = self.classify(request);
        let policy = outcome.policy();
        (outcome, policy)
    }

    fn is_private_scheme(&self, url: &Url) -> bool {
        url.scheme().eq_ignore_ascii_case(&self.scheme)
    }

    fn is_cancel_host(&self, url: &Url) -> bool {
        url.host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(&self.cancel_host))
    }

    fn classify_cancel(&self, url: &Url) -> ClassificationOutcome {
        let params = parse_query(url.query().unwrap_or_default());

        match (params.get(ERROR_CODE_KEY), params.get(ERROR_MESSAGE_KEY)) {
            (Some(code), Some(message)) => {
                ClassificationOutcome::FailWithError(self.cancellation_error(code, message))
            }
            _ => ClassificationOutcome::Cancel,
        }
    }

    fn cancellation_error(&self, code: &str, message: &str) -> DialogError {
        let code = code.trim().parse::<i64>().unwrap_or_else(|_| {
            warn!(error_code = code, "Non-numeric error_code on cancel URL");
            self.unknown_error_code
        });
        DialogError::new(self.error_domain.as_str(), code, message)
    }
}

/// 连接URL的结果：查询参数，再合并片段参数（片段优先）
fn connect_results(url: &Url) -> DialogResults {
    let mut results = parse_query(url.query().unwrap_or_default());
    if let Some(fragment) = url.fragment() {
        results.extend(parse_query(fragment));
    }
    results
}
