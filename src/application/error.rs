//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。应用层不翻译、不吞错:
//! 领域校验错误与仓储错误原样向上传播，由入站适配器决定对外表现。

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::ValidationError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 校验错误
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// 仓储错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
