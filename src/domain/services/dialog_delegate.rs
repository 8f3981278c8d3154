// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

use crate::domain::models::navigation::{DialogError, DialogResults};

/// 网页对话框委托特质
///
/// 由对话框的宿主实现，接收交互流程的最终结果。
pub trait WebDialogDelegate: Send + Sync {
    /// 流程完成，交付结果
    fn on_complete(&self, results: DialogResults);

    /// 流程失败，交付错误
    fn on_fail(&self, error: DialogError);

    /// 流程被取消
    fn on_cancel(&self);
}

/// 外部打开完成回调，参数表示是否打开成功
pub type OpenCompletion = Box<dyn FnOnce(bool) + Send + 'static>;

/// 外部URL打开器特质
///
/// 打开是异步的：`open_url` 立即返回，结果稍后通过 `completion` 报告。
pub trait ExternalUrlOpener: Send + Sync {
    /// 在对话框之外打开URL
    fn open_url(&self, url: &Url, completion: OpenCompletion);
}
