//! # 倒空间采样网格
//!
//! 在 (qx, qy) 平面上生成正方形采样网格，并以齐次坐标 (qx, qy, qz, 1)
//! 存储，便于用 4×4 矩阵做旋转。
//!
//! ## 布局
//! - 行主序：行索引对应 qy，列索引对应 qx
//! - 第 `i` 个坐标严格等于第 `n-1-i` 个坐标的相反数
//!
//! ## 依赖关系
//! - 被 `saxs/model.rs` 使用
//! - 使用 `nalgebra` 的 Vector3/Vector4/Matrix4

use nalgebra::{Matrix4, Vector3, Vector4};

/// 正方形采样网格（构造后不可变）
#[derive(Debug, Clone)]
pub struct SamplingGrid {
    /// 每边采样点数
    resolution: usize,
    /// 网格半宽 q_max，覆盖 [-q_max, q_max]
    q_max: f64,
    /// 一维坐标轴
    axis: Vec<f64>,
    /// 齐次坐标点（行主序）
    points: Vec<Vector4<f64>>,
}

impl SamplingGrid {
    /// 生成覆盖 [-q_max, q_max]² 的正方形网格
    ///
    /// 调用方保证 `resolution >= 2`。
    pub fn square(q_max: f64, resolution: usize) -> Self {
        let axis = symmetric_linspace(q_max, resolution);

        let mut points = Vec::with_capacity(resolution * resolution);
        for &qy in &axis {
            for &qx in &axis {
                points.push(Vector4::new(qx, qy, 0.0, 1.0));
            }
        }

        SamplingGrid {
            resolution,
            q_max,
            axis,
            points,
        }
    }

    /// 每边采样点数
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// 网格半宽
    pub fn q_max(&self) -> f64 {
        self.q_max
    }

    /// 一维坐标（qx 与 qy 共用）
    pub fn axis_values(&self) -> &[f64] {
        &self.axis
    }

    /// 原始网格的空间分量 (qx, qy, qz)
    pub fn spatial(&self) -> Vec<Vector3<f64>> {
        self.points.iter().map(|p| p.xyz()).collect()
    }

    /// 对网格副本施加齐次变换并丢弃 w 分量
    ///
    /// 存储的网格本身不会被修改。
    pub fn transformed(&self, transform: &Matrix4<f64>) -> Vec<Vector3<f64>> {
        self.points.iter().map(|p| (transform * p).xyz()).collect()
    }
}

/// 关于原点严格对称的等间距采样
fn symmetric_linspace(half_width: f64, n: usize) -> Vec<f64> {
    let span = (n - 1) as f64;
    (0..n)
        .map(|i| {
            // 分子为整数，正负两侧舍入一致
            let k = 2.0 * i as f64 - span;
            half_width * k / span
        })
        .collect()
}
