//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `saxs/`, `models/`, `batch/`, `utils/`
//! - 子模块: pattern, sweep, rotation

pub mod pattern;
pub mod rotation;
pub mod sweep;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Pattern(args) => pattern::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Rotation(args) => rotation::execute(args),
    }
}
