//! # rotation 命令实现
//!
//! 打印样品的 4×4 齐次变换矩阵，以及圆柱轴在实验室坐标系中的方向。
//! 该矩阵与 `pattern`/`sweep` 使用的转动一致，可直接交给外部三维视图。
//!
//! ## 依赖关系
//! - 使用 `cli/rotation.rs` 定义的 RotationArgs
//! - 使用 `saxs/rotation.rs` 构造矩阵

use crate::cli::rotation::RotationArgs;
use crate::error::{Result, SaxsError};
use crate::saxs::rotation_matrix;
use crate::utils::output;

use nalgebra::{Matrix3, Matrix4, Vector4};
use tabled::{Table, Tabled};

/// 矩阵表格行
#[derive(Tabled)]
struct MatrixRow {
    #[tabled(rename = "")]
    label: &'static str,
    x: String,
    y: String,
    z: String,
    w: String,
}

/// 执行 rotation 命令
pub fn execute(args: RotationArgs) -> Result<()> {
    output::print_header("Sample Transform");

    if !args.angle.is_finite() {
        return Err(SaxsError::InvalidArgument(format!(
            "rotation angle must be finite, got {}",
            args.angle
        )));
    }

    let m = rotation_matrix(args.angle, args.axis);
    output::print_info(&format!("{:.4}° about {} (counter-clockwise)", args.angle, args.axis));

    println!("{}", Table::new(matrix_rows(&m)));

    let spatial: Matrix3<f64> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let det = spatial.determinant();
    let cylinder_axis = m * Vector4::new(0.0, 0.0, 1.0, 0.0);

    output::print_info(&format!("det(R) = {:.6}", det));
    output::print_success(&format!(
        "Cylinder axis direction: ({:.4}, {:.4}, {:.4})",
        cylinder_axis.x, cylinder_axis.y, cylinder_axis.z
    ));

    Ok(())
}

/// 将矩阵转换为表格行
fn matrix_rows(m: &Matrix4<f64>) -> Vec<MatrixRow> {
    const LABELS: [&str; 4] = ["x'", "y'", "z'", "w'"];
    // 避免打印 -0.0000
    let fmt = |v: f64| format!("{:.4}", if v.abs() < 5e-5 { 0.0 } else { v });

    LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| MatrixRow {
            label,
            x: fmt(m[(i, 0)]),
            y: fmt(m[(i, 1)]),
            z: fmt(m[(i, 2)]),
            w: fmt(m[(i, 3)]),
        })
        .collect()
}
