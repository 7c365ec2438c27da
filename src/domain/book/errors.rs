//! Book Context - Errors

use thiserror::Error;

/// 校验错误
///
/// 值对象与聚合根构造时产生，构造失败即没有实例。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} 不能为空")]
    Empty(&'static str),

    #[error("{field} 长度不能超过{max}字符")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} 超出允许范围: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}
