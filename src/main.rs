//! # saxsim - 圆柱小角 X 射线散射模拟器
//!
//! 在倒空间网格上计算圆柱的解析形状因子，并在样品旋转后重算散射图样。
//!
//! ## 子命令
//! - `pattern`  - 单一取向的散射图样
//! - `sweep`    - 角度扫描，并行导出每一帧
//! - `rotation` - 打印样品变换矩阵（供外部三维视图使用）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── saxs/      (形状因子、旋转、导出)
//!   │     ├── models/    (圆柱、网格、强度场)
//!   │     └── batch/     (并行批处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod saxs;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
