//! # sweep 子命令 CLI 定义
//!
//! 在一段角度范围内逐帧计算散射图样并批量导出
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/pattern.rs` 的 ModelArgs, ExportFormat
//! - 参数传递给 `commands/sweep.rs`

use super::pattern::{parse_axis, ExportFormat, ModelArgs};
use crate::saxs::Axis;

use clap::Args;
use std::path::PathBuf;

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Angle range in degrees, inclusive (e.g., "0-360", "-90-90")
    #[arg(short, long, default_value = "0-360", allow_hyphen_values = true)]
    pub range: String,

    /// Angle step in degrees
    #[arg(long, default_value_t = 10.0)]
    pub step: f64,

    /// Rotation axis: x, y or z (1, 2, 3 also accepted)
    #[arg(long, default_value = "z", value_parser = parse_axis)]
    pub axis: Axis,

    /// Output directory for frame files
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,

    /// Frame file format
    #[arg(short, long, value_enum, default_value = "matrix")]
    pub format: ExportFormat,

    /// Keep every n-th grid point in each direction
    #[arg(long, default_value_t = 1)]
    pub stride: usize,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing frame files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
