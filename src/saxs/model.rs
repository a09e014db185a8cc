//! # 圆柱散射模型
//!
//! 在固定的倒空间网格上计算圆柱的形状因子与散射强度，
//! 并在样品绕主轴旋转后重新计算强度。
//!
//! ## 算法概述
//! 1. 由半径确定网格范围 ±6π/R，生成齐次坐标网格（只生成一次）
//! 2. 计算未旋转时的强度，供初始显示
//! 3. 每次旋转：构造旋转矩阵 R，对网格副本做 Rᵀ 变换，重新计算 |F|²
//!
//! ## 旋转约定
//! 角度表示样品本身的转动。样品转动 R 后的散射振幅为 F(Rᵀq)，
//! 因此网格与 R 的转置相乘；`rotation_matrix` 返回的 R 可直接用于
//! 外部三维视图中的圆柱，二者保持一致。
//!
//! ## 依赖关系
//! - 被 `commands/pattern.rs`, `commands/sweep.rs` 调用
//! - 使用 `models/` 的 Cylinder, SamplingGrid, IntensityField
//! - 使用 `saxs/form_factor.rs`, `saxs/rotation.rs`

use crate::error::{Result, SaxsError};
use crate::models::{Cylinder, IntensityField, SamplingGrid};
use crate::saxs::form_factor::{cylinder_form_factor, cylinder_intensity};
use crate::saxs::rotation::{rotation_matrix, Axis};

use nalgebra::Vector3;
use num_complex::Complex64;
use std::borrow::Cow;
use std::f64::consts::{PI, SQRT_2};

/// 默认每边采样点数
pub const DEFAULT_RESOLUTION: usize = 1000;

/// 网格半宽 q_max = GRID_EXTENT / R，保证主要衍射环可见
pub const GRID_EXTENT: f64 = 6.0 * PI;

/// 圆柱散射模型
#[derive(Debug, Clone)]
pub struct ScatteringModel {
    cylinder: Cylinder,
    grid: SamplingGrid,
    initial: IntensityField,
}

impl ScatteringModel {
    /// 指定每边采样点数创建模型
    ///
    /// 除几何参数本身外，还要求网格范围 q_max 以及旋转后可能达到的
    /// 轴向相位 √2·q_max·H 均为有限值，否则整场强度会变为 NaN。
    pub fn with_resolution(radius: f64, height: f64, resolution: usize) -> Result<Self> {
        let cylinder = Cylinder::new(radius, height)?;

        if resolution < 2 {
            return Err(SaxsError::InvalidArgument(format!(
                "grid resolution must be at least 2, got {}",
                resolution
            )));
        }

        let q_max = GRID_EXTENT / radius;
        if !q_max.is_finite() {
            return Err(SaxsError::DegenerateRadius(radius));
        }
        if !(SQRT_2 * q_max * height).is_finite() {
            return Err(SaxsError::DegenerateHeight(height));
        }

        let grid = SamplingGrid::square(q_max, resolution);
        let values = grid
            .spatial()
            .iter()
            .map(|q| cylinder_intensity(&cylinder, q))
            .collect();
        let initial = IntensityField::new(resolution, values);

        Ok(ScatteringModel {
            cylinder,
            grid,
            initial,
        })
    }

    /// 样品几何参数
    pub fn cylinder(&self) -> &Cylinder {
        &self.cylinder
    }

    /// 采样网格
    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    /// 未旋转时的强度（构造时计算）
    pub fn initial_intensity(&self) -> &IntensityField {
        &self.initial
    }

    /// 对一组 q 点逐点计算复形状因子
    pub fn form_factor<'a>(
        &'a self,
        coords: &'a [Vector3<f64>],
    ) -> impl Iterator<Item = Complex64> + 'a {
        coords
            .iter()
            .map(move |q| cylinder_form_factor(&self.cylinder, q))
    }

    /// 对一组 q 点计算散射强度 |F|²
    pub fn intensity(&self, coords: &[Vector3<f64>]) -> Vec<f64> {
        self.form_factor(coords).map(|f| f.norm_sqr()).collect()
    }

    /// 样品绕 `axis` 旋转 `angle_deg` 度后的强度场
    ///
    /// 每次都从原始网格出发，结果只取决于 (角度, 轴)。
    pub fn recompute(&self, angle_deg: f64, axis: Axis) -> Result<IntensityField> {
        if !angle_deg.is_finite() {
            return Err(SaxsError::InvalidArgument(format!(
                "rotation angle must be finite, got {}",
                angle_deg
            )));
        }

        let rotation = rotation_matrix(angle_deg, axis);
        let coords = self.grid.transformed(&rotation.transpose());

        Ok(IntensityField::new(
            self.grid.resolution(),
            self.intensity(&coords),
        ))
    }

    /// 指定取向下的强度场
    ///
    /// 整圈旋转（含 0°）直接借用构造时的初始强度，其余角度调用 `recompute`。
    pub fn oriented_intensity(
        &self,
        angle_deg: f64,
        axis: Axis,
    ) -> Result<Cow<'_, IntensityField>> {
        if angle_deg.rem_euclid(360.0) == 0.0 {
            return Ok(Cow::Borrowed(self.initial_intensity()));
        }
        self.recompute(angle_deg, axis).map(Cow::Owned)
    }
}
