// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::domain::models::navigation::{
    ClassificationOutcome, DialogError, DialogResults, NavigationPolicy, NavigationRequest,
    NavigationType,
};
use crate::domain::services::failure_filter::FailureDisposition;

/// DTO转换错误
#[derive(Error, Debug)]
pub enum NavigationDtoError {
    /// URL无效
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// 导航分类请求数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ClassifyNavigationRequestDto {
    /// 导航目标URL
    pub url: String,
    /// 导航类型，缺省为 other
    #[serde(default)]
    pub navigation_type: NavigationType,
}

impl ClassifyNavigationRequestDto {
    /// 转换为领域导航请求
    pub fn into_request(self) -> Result<NavigationRequest, NavigationDtoError> {
        let url = Url::parse(self.url.trim())?;
        Ok(NavigationRequest::new(url, self.navigation_type))
    }
}

/// 导航分类响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ClassificationResponseDto {
    /// 分类结果名称
    pub outcome: String,
    /// 导航策略
    pub policy: NavigationPolicy,
    /// 完成结果（仅 complete_with_results）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<DialogResults>,
    /// 错误（仅 fail_with_error）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DialogError>,
    /// 外部打开的URL（仅 open_externally）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<ClassificationOutcome> for ClassificationResponseDto {
    fn from(outcome: ClassificationOutcome) -> Self {
        let mut dto = Self {
            outcome: outcome.name().to_string(),
            policy: outcome.policy(),
            results: None,
            error: None,
            url: None,
        };
        match outcome {
            ClassificationOutcome::CompleteWithResults(results) => dto.results = Some(results),
            ClassificationOutcome::FailWithError(error) => dto.error = Some(error),
            ClassificationOutcome::OpenExternally(url) => dto.url = Some(url.to_string()),
            ClassificationOutcome::Allow | ClassificationOutcome::Cancel => {}
        }
        dto
    }
}

/// 导航失败处置响应
#[derive(Debug, Deserialize, Serialize)]
pub struct FailureDispositionResponseDto {
    pub disposition: FailureDisposition,
}
