// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::process::Stdio;
use tokio::process::Command;
use tracing::warn;
use url::Url;

use crate::config::settings::{OpenerSettings, DEFAULT_OPENER_PROGRAM};
use crate::domain::services::dialog_delegate::{ExternalUrlOpener, OpenCompletion};

/// 通过系统命令打开外部URL
///
/// 在当前 tokio 运行时上启动 `program <url>`，以退出状态报告是否成功。
#[derive(Debug, Clone)]
pub struct CommandUrlOpener {
    program: String,
}

impl Default for CommandUrlOpener {
    fn default() -> Self {
        Self::new(DEFAULT_OPENER_PROGRAM)
    }
}

impl CommandUrlOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 从配置创建打开器
    pub fn from_settings(settings: &OpenerSettings) -> Self {
        Self::new(settings.program.as_str())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ExternalUrlOpener for CommandUrlOpener {
    fn open_url(&self, url: &Url, completion: OpenCompletion) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(url = %url, "No tokio runtime available, cannot open URL");
                completion(false);
                return;
            }
        };

        let program = self.program.clone();
        let target = url.to_string();
        handle.spawn(async move {
            let status = Command::new(&program)
                .arg(&target)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await;

            let success = match status {
                Ok(status) => status.success(),
                Err(e) => {
                    warn!(program = %program, error = %e, "Failed to launch URL opener");
                    false
                }
            };
            completion(success);
        });
    }
}

/// 不做任何事、立即报告成功的打开器
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUrlOpener;

impl ExternalUrlOpener for NoopUrlOpener {
    fn open_url(&self, _url: &Url, completion: OpenCompletion) {
        completion(true);
    }
}
