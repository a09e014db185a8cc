//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `pattern`: 单一取向的散射图样
//! - `sweep`: 角度扫描，批量导出帧
//! - `rotation`: 打印样品变换矩阵
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: pattern, sweep, rotation

pub mod pattern;
pub mod rotation;
pub mod sweep;

use clap::{Parser, Subcommand};

/// saxsim - 圆柱小角散射模拟器
#[derive(Parser)]
#[command(name = "saxsim")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Small-angle X-ray scattering simulator for rotating cylinders", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the scattering pattern for one sample orientation
    Pattern(pattern::PatternArgs),

    /// Sweep the sample through a range of angles and export every frame
    Sweep(sweep::SweepArgs),

    /// Print the 4x4 sample transform for an angle and axis
    Rotation(rotation::RotationArgs),
}
