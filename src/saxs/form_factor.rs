//! # 圆柱形状因子
//!
//! ## 公式
//! F(q) = 2 · sinc(qz·H / 2π) · J1(qr·R) / (qr·R)
//! 其中 qr = hypot(qx, qy)，sinc 为归一化形式
//!
//! qr = 0 时取解析极限 J1(x)/x → 1/2，因此 F(0) = 1。
//!
//! ## 依赖关系
//! - 被 `saxs/model.rs` 调用
//! - 使用 `saxs/special.rs` 的 sinc, jinc
//! - 使用 `num-complex` 表示复振幅

use crate::models::Cylinder;
use crate::saxs::special::{jinc, sinc};

use nalgebra::Vector3;
use num_complex::Complex64;
use std::f64::consts::PI;

/// 单个 q 点的复形状因子
pub fn cylinder_form_factor(cylinder: &Cylinder, q: &Vector3<f64>) -> Complex64 {
    let qr = q.x.hypot(q.y);
    let axial = sinc(q.z * cylinder.height / (2.0 * PI));
    let radial = jinc(qr * cylinder.radius);

    Complex64::new(2.0 * axial * radial, 0.0)
}

/// 散射强度 |F|²
pub fn cylinder_intensity(cylinder: &Cylinder, q: &Vector3<f64>) -> f64 {
    cylinder_form_factor(cylinder, q).norm_sqr()
}
