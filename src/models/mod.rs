//! # 数据模型模块
//!
//! 定义散射样品、倒空间采样网格和强度场数据模型。
//!
//! ## 依赖关系
//! - 被 `saxs/` 和 `commands/` 使用
//! - 子模块: cylinder, grid, field

pub mod cylinder;
pub mod field;
pub mod grid;

pub use cylinder::Cylinder;
pub use field::{FieldStats, IntensityField};
pub use grid::SamplingGrid;
