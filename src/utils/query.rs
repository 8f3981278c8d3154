// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// 查询字符串格式错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `%` 后没有跟两位十六进制数字
    #[error("invalid percent escape at byte {0}")]
    InvalidEscape(usize),
    /// 百分号解码后不是合法的 UTF-8
    #[error("percent-decoded text is not valid UTF-8: {0}")]
    InvalidUtf8(String),
    /// 键值对解码失败
    #[error("failed to decode query pairs: {0}")]
    Decode(String),
}

/// 解析 `key=value&...` 形式的查询字符串
///
/// 重复的键以最后一次出现为准；没有 `=` 的片段值为空字符串。
/// 无法解析的输入退化为空映射，不作为错误返回。
pub fn parse_query(input: &str) -> BTreeMap<String, String> {
    if input.is_empty() {
        return BTreeMap::new();
    }

    match try_parse_query(input) {
        Ok(params) => params,
        Err(e) => {
            warn!(query = input, error = %e, "Malformed query string, using empty mapping");
            BTreeMap::new()
        }
    }
}

/// 严格解析查询字符串
///
/// 与 [`parse_query`] 相同，但遇到非法百分号转义或非 UTF-8 内容时返回错误，
/// 而不是用替换字符做有损解码。
pub fn try_parse_query(input: &str) -> Result<BTreeMap<String, String>, QueryError> {
    validate_escapes(input)?;
    // '+' is a space in form encoding, not part of a percent escape
    urlencoding::decode(&input.replace('+', " "))
        .map_err(|e| QueryError::InvalidUtf8(e.to_string()))?;

    serde_urlencoded::from_str::<Vec<(String, String)>>(input)
        .map(|pairs| pairs.into_iter().collect())
        .map_err(|e| QueryError::Decode(e.to_string()))
}

fn validate_escapes(input: &str) -> Result<(), QueryError> {
    let bytes = input.as_bytes();
    for (i, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(QueryError::InvalidEscape(i));
        }
    }
    Ok(())
}
