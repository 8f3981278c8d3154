// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::navigation_request::{
    ClassificationResponseDto, ClassifyNavigationRequestDto, FailureDispositionResponseDto,
};
use crate::domain::models::navigation::NavigationFailure;
use crate::domain::services::failure_filter::FailureFilter;
use crate::domain::services::navigation_classifier::NavigationClassifier;
use crate::presentation::errors::AppError;

/// 处理导航分类请求
///
/// # 参数
///
/// * `classifier` - 导航分类器
/// * `payload` - 导航分类请求数据
///
/// # 返回值
///
/// 返回分类结果和导航策略。服务端只报告决定，不会打开任何URL。
///
/// # 错误
///
/// URL无法解析时返回 400
pub async fn classify_navigation(
    Extension(classifier): Extension<Arc<NavigationClassifier>>,
    Json(payload): Json<ClassifyNavigationRequestDto>,
) -> Result<Json<ClassificationResponseDto>, AppError> {
    let request = payload.into_request()?;
    let outcome = classifier.classify(&request);
    Ok(Json(outcome.into()))
}

/// 处理导航失败过滤请求
///
/// # 参数
///
/// * `filter` - 导航失败过滤器
/// * `payload` - 网页引擎报告的失败
///
/// # 返回值
///
/// 返回 suppress 或 forward
pub async fn filter_navigation_failure(
    Extension(filter): Extension<Arc<FailureFilter>>,
    Json(payload): Json<NavigationFailure>,
) -> Json<FailureDispositionResponseDto> {
    Json(FailureDispositionResponseDto {
        disposition: filter.classify_failure(&payload),
    })
}
