// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::settings::Settings;
use crate::domain::models::navigation::{
    ClassificationOutcome, NavigationFailure, NavigationPolicy, NavigationRequest,
};
use crate::domain::services::dialog_delegate::{ExternalUrlOpener, WebDialogDelegate};
use crate::domain::services::failure_filter::{FailureDisposition, FailureFilter};
use crate::domain::services::navigation_classifier::NavigationClassifier;

/// 对话框内部状态
#[derive(Debug, Default)]
struct DialogState {
    /// 加载指示器是否处于活动状态
    loading: bool,
    /// 最近一次请求加载的URL
    current_url: Option<Url>,
}

/// 网页对话框控制器
///
/// 接收网页视图的导航回调，借助 [`NavigationClassifier`] 做出策略决定，
/// 并把结果分派给委托或外部打开器。加载指示器只维护状态，不负责绘制。
pub struct WebDialogView {
    /// 导航分类器
    classifier: NavigationClassifier,
    /// 导航失败过滤器
    failure_filter: FailureFilter,
    /// 结果委托
    delegate: Arc<dyn WebDialogDelegate>,
    /// 外部URL打开器
    url_opener: Arc<dyn ExternalUrlOpener>,
    /// 可变状态
    state: Mutex<DialogState>,
}

impl WebDialogView {
    /// 使用默认分类器和失败过滤器创建对话框
    ///
    /// # 参数
    ///
    /// * `delegate` - 结果委托
    /// * `url_opener` - 外部URL打开器
    pub fn new(
        delegate: Arc<dyn WebDialogDelegate>,
        url_opener: Arc<dyn ExternalUrlOpener>,
    ) -> Self {
        Self::with_components(
            NavigationClassifier::default(),
            FailureFilter::default(),
            delegate,
            url_opener,
        )
    }

    /// 使用指定组件创建对话框
    pub fn with_components(
        classifier: NavigationClassifier,
        failure_filter: FailureFilter,
        delegate: Arc<dyn WebDialogDelegate>,
        url_opener: Arc<dyn ExternalUrlOpener>,
    ) -> Self {
        Self {
            classifier,
            failure_filter,
            delegate,
            url_opener,
            state: Mutex::new(DialogState::default()),
        }
    }

    /// 从配置创建对话框
    pub fn from_settings(
        settings: &Settings,
        delegate: Arc<dyn WebDialogDelegate>,
        url_opener: Arc<dyn ExternalUrlOpener>,
    ) -> Self {
        Self::with_components(
            NavigationClassifier::from_settings(&settings.dialog),
            FailureFilter::from_settings(&settings.navigation),
            delegate,
            url_opener,
        )
    }

    /// 请求加载URL
    pub fn load_url(&self, url: Url) {
        info!(url = %url, "Loading dialog URL");
        let mut state = self.state.lock();
        state.current_url = Some(url);
        state.loading = true;
    }

    pub fn current_url(&self) -> Option<Url> {
        self.state.lock().current_url.clone()
    }

    /// 加载指示器是否处于活动状态
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// 网页视图开始导航
    pub fn did_start_navigation(&self) {
        self.state.lock().loading = true;
    }

    /// 网页视图完成导航
    pub fn did_finish_navigation(&self) {
        self.state.lock().loading = false;
    }

    /// 网页视图导航失败
    ///
    /// 无论失败是否无害，加载指示器都会停止；
    /// 只有非无害失败会原样转发给委托。
    pub fn did_fail_navigation(&self, failure: &NavigationFailure) -> FailureDisposition {
        self.state.lock().loading = false;

        let disposition = self.failure_filter.classify_failure(failure);
        match disposition {
            FailureDisposition::Suppress => {
                debug!(
                    domain = %failure.domain,
                    code = failure.code,
                    "Suppressed benign navigation failure"
                );
            }
            FailureDisposition::Forward => {
                warn!(
                    domain = %failure.domain,
                    code = failure.code,
                    description = %failure.description,
                    "Navigation failed"
                );
                self.delegate.on_fail(failure.clone().into());
            }
        }
        disposition
    }

    /// 决定导航策略
    ///
    /// 对请求分类、分派副作用，然后在返回之前同步调用一次 `decision_handler`。
    /// 外部打开的完成回调只记录日志，不会重新计算策略。
    pub fn decide_policy_for_navigation<F>(
        &self,
        request: &NavigationRequest,
        decision_handler: F,
    ) -> ClassificationOutcome
    where
        F: FnOnce(NavigationPolicy),
    {
        let (outcome, policy) = self.classifier.decide(request);
        self.dispatch(&outcome);
        decision_handler(policy);
        outcome
    }

    // No state lock is held here, delegates may call back into the view.
    fn dispatch(&self, outcome: &ClassificationOutcome) {
        match outcome {
            ClassificationOutcome::Allow => {}
            ClassificationOutcome::CompleteWithResults(results) => {
                self.delegate.on_complete(results.clone());
            }
            ClassificationOutcome::FailWithError(error) => {
                self.delegate.on_fail(error.clone());
            }
            ClassificationOutcome::Cancel => {
                self.delegate.on_cancel();
            }
            ClassificationOutcome::OpenExternally(url) => {
                let target = url.to_string();
                self.url_opener.open_url(
                    url,
                    Box::new(move |success| {
                        debug!(url = %target, success, "External open finished");
                    }),
                );
            }
        }
    }
}
