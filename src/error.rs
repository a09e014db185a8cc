//! # 统一错误处理模块
//!
//! 定义 saxsim 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// saxsim 统一错误类型
#[derive(Error, Debug)]
pub enum SaxsError {
    // ─────────────────────────────────────────────────────────────
    // 模型参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid rotation axis '{0}' (expected x, y, z or 1, 2, 3)")]
    InvalidAxis(String),

    #[error("Degenerate cylinder radius: {0} (must be a finite value > 0)")]
    DegenerateRadius(f64),

    #[error("Degenerate cylinder height: {0} (must be a finite value > 0)")]
    DegenerateHeight(f64),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SaxsError>;
