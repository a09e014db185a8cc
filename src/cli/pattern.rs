//! # pattern 子命令 CLI 定义
//!
//! 计算单个取向下的散射图样，以及各子命令共用的模型参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 和 `cli/sweep.rs` 使用
//! - 参数传递给 `commands/pattern.rs`

use crate::saxs::model::DEFAULT_RESOLUTION;
use crate::saxs::Axis;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 解析旋转轴（x/y/z 或 1/2/3）
pub fn parse_axis(input: &str) -> Result<Axis, String> {
    input.parse::<Axis>().map_err(|e| e.to_string())
}

/// 强度场输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// Long-form CSV (qx, qy, intensity)
    Csv,
    /// Whitespace-separated intensity matrix with '#' header
    Matrix,
}

impl ExportFormat {
    /// 默认文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Matrix => "dat",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Matrix => write!(f, "matrix"),
        }
    }
}

/// 圆柱模型参数（各子命令共用）
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Cylinder radius (same length unit as 1/q)
    #[arg(long, default_value_t = 2.0)]
    pub radius: f64,

    /// Cylinder height
    #[arg(long, default_value_t = 10.0)]
    pub height: f64,

    /// Grid samples per side of the q-space window (±6π/radius)
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    pub points: usize,
}

/// pattern 子命令参数
#[derive(Args, Debug)]
pub struct PatternArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Sample rotation angle in degrees
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle: f64,

    /// Rotation axis: x, y or z (1, 2, 3 also accepted)
    #[arg(long, default_value = "z", value_parser = parse_axis)]
    pub axis: Axis,

    /// Output file
    #[arg(short, long, default_value = "pattern.dat")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Keep every n-th grid point in each direction
    #[arg(long, default_value_t = 1)]
    pub stride: usize,
}
