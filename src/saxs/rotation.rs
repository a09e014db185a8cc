//! # 三维旋转矩阵
//!
//! 构造绕坐标主轴旋转的 4×4 齐次变换矩阵。
//!
//! ## 约定
//! - 角度单位：度
//! - 右手系，逆时针为正方向
//! - 最后一行/列为齐次坐标的单位分量
//!
//! ## 依赖关系
//! - 被 `saxs/model.rs` 和 `commands/rotation.rs` 使用
//! - 使用 `nalgebra` 的 Matrix4

use crate::error::{Result, SaxsError};

use nalgebra::Matrix4;
use std::str::FromStr;

/// 旋转轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// 从数字编号解析（1 = x, 2 = y, 3 = z）
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            1 => Ok(Axis::X),
            2 => Ok(Axis::Y),
            3 => Ok(Axis::Z),
            other => Err(SaxsError::InvalidAxis(other.to_string())),
        }
    }
}

impl FromStr for Axis {
    type Err = SaxsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i64>() {
            return Axis::from_index(index);
        }
        match s.to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(SaxsError::InvalidAxis(s.to_string())),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// 绕指定轴旋转 `angle_deg` 度的齐次矩阵
pub fn rotation_matrix(angle_deg: f64, axis: Axis) -> Matrix4<f64> {
    let phi = angle_deg.to_radians();
    let (s, c) = phi.sin_cos();

    match axis {
        Axis::X => Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ),
        Axis::Y => Matrix4::new(
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ),
        Axis::Z => Matrix4::new(
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix3, Vector4};

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[test]
    fn test_axis_parse() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("3".parse::<Axis>().unwrap(), Axis::Z);
        assert!(matches!("w".parse::<Axis>(), Err(SaxsError::InvalidAxis(_))));
        assert_eq!(Axis::default(), Axis::Z);
    }

    #[test]
    fn test_axis_index_out_of_range() {
        assert_eq!(Axis::from_index(2).unwrap(), Axis::Y);
        let err = Axis::from_index(4).unwrap_err();
        assert!(matches!(err, SaxsError::InvalidAxis(ref s) if s == "4"));
        assert!(Axis::from_index(0).is_err());
    }

    #[test]
    fn test_rotation_orthogonal() {
        for axis in AXES {
            for angle in [0.0, 17.5, 90.0, 133.0, 270.0, -45.0, 721.0] {
                let m = rotation_matrix(angle, axis);
                let r: Matrix3<f64> = m.fixed_view::<3, 3>(0, 0).into_owned();

                let identity = r.transpose() * r;
                assert!(
                    (identity - Matrix3::identity()).abs().max() < 1e-12,
                    "not orthogonal: axis {}, angle {}",
                    axis,
                    angle
                );
                assert!(
                    (r.determinant() - 1.0).abs() < 1e-12,
                    "det != 1: axis {}, angle {}",
                    axis,
                    angle
                );
            }
        }
    }

    #[test]
    fn test_rotation_homogeneous_row() {
        let m = rotation_matrix(42.0, Axis::Y);
        assert_eq!(m.row(3).into_owned(), Vector4::new(0.0, 0.0, 0.0, 1.0).transpose());
        assert_eq!(m.column(3).into_owned(), Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotation_counter_clockwise() {
        // 绕 z 轴 +90°: x -> y
        let p = rotation_matrix(90.0, Axis::Z) * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);

        // 绕 x 轴 +90°: y -> z
        let p = rotation_matrix(90.0, Axis::X) * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert!((p.y).abs() < 1e-12 && (p.z - 1.0).abs() < 1e-12);

        // 绕 y 轴 +90°: z -> x
        let p = rotation_matrix(90.0, Axis::Y) * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert!((p.z).abs() < 1e-12 && (p.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_periodic() {
        for axis in AXES {
            let a = rotation_matrix(30.0, axis);
            let b = rotation_matrix(390.0, axis);
            assert!((a - b).abs().max() < 1e-12);
        }
    }
}
