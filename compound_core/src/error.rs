//! `error`：core 层唯一的错误类型。

use thiserror::Error;

/// 匹配器错误。
///
/// 没有合成词不是错误（返回 `Ok(None)`）；这里只有“输入不合法”和“搜索超出上限”两类。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// 词表中出现空串：空串在 `matched_until = 0 = len` 时会被当成“已匹配”，构造时直接拒绝。
    #[error("word list entry #{index} is empty")]
    EmptyWord { index: usize },

    /// 一次搜索创建的状态数超过上限（含初始状态）。
    #[error("search exhausted its budget of {limit} states")]
    ResourceExhausted { limit: usize },
}

pub type MatchResult<T> = Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::EmptyWord { index: 3 };
        assert_eq!(err.to_string(), "word list entry #3 is empty");

        let err = MatchError::ResourceExhausted { limit: 128 };
        assert!(err.to_string().contains("128"));
    }
}
