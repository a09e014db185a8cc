//! # SAXS 计算模块
//!
//! 提供圆柱小角 X 射线散射图样的计算与导出。
//!
//! ## 子模块
//! - `special`: sinc 与 Bessel J1 等特殊函数
//! - `rotation`: 齐次旋转矩阵
//! - `form_factor`: 圆柱形状因子
//! - `model`: 散射模型（网格 + 旋转重算）
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 的 Cylinder, SamplingGrid, IntensityField

pub mod export;
pub mod form_factor;
pub mod model;
pub mod rotation;
pub mod special;

pub use model::ScatteringModel;
pub use rotation::{rotation_matrix, Axis};
