//! # rotation 子命令 CLI 定义
//!
//! 打印样品变换矩阵，供外部三维视图使用
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rotation.rs`

use super::pattern::parse_axis;
use crate::saxs::Axis;

use clap::Args;

/// rotation 子命令参数
#[derive(Args, Debug)]
pub struct RotationArgs {
    /// Rotation angle in degrees
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle: f64,

    /// Rotation axis: x, y or z (1, 2, 3 also accepted)
    #[arg(long, default_value = "z", value_parser = parse_axis)]
    pub axis: Axis,
}
