//! # 圆柱体几何模型
//!
//! 描述散射样品（实心圆柱）的几何参数。
//!
//! ## 依赖关系
//! - 被 `saxs/form_factor.rs` 和 `saxs/model.rs` 使用
//! - 无外部模块依赖

use crate::error::{Result, SaxsError};

/// 实心圆柱，轴向沿样品坐标系 z 轴
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// 半径 R
    pub radius: f64,
    /// 高度 H
    pub height: f64,
}

impl Cylinder {
    /// 创建圆柱并校验参数（必须为有限正数）
    pub fn new(radius: f64, height: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SaxsError::DegenerateRadius(radius));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(SaxsError::DegenerateHeight(height));
        }
        Ok(Cylinder { radius, height })
    }

    /// 长径比 H / 2R
    pub fn aspect_ratio(&self) -> f64 {
        self.height / (2.0 * self.radius)
    }
}

impl std::fmt::Display for Cylinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cylinder(R = {}, H = {})", self.radius, self.height)
    }
}
