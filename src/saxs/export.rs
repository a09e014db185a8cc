//! # 强度场数据导出
//!
//! 导出散射强度场到 CSV 和矩阵文本格式。
//!
//! ## 支持格式
//! - CSV: 长表格式，每个像素一行 (qx, qy, intensity)
//! - Matrix: `#` 注释头 + 每行一个网格行、空白分隔的数值，
//!   可直接作为图像数组读入
//!
//! ## 依赖关系
//! - 被 `commands/pattern.rs`, `commands/sweep.rs` 调用
//! - 使用 `saxs/model.rs` 的 ScatteringModel 获取坐标和参数
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{Result, SaxsError};
use crate::models::IntensityField;
use crate::saxs::{Axis, ScatteringModel};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 单帧的旋转参数（写入文件头）
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub angle: f64,
    pub axis: Axis,
}

/// CSV 记录
#[derive(Debug, Serialize)]
struct IntensityRecord {
    qx: f64,
    qy: f64,
    intensity: f64,
}

/// 导出为 CSV 长表，`stride` 为行列方向的抽样间隔
pub fn to_csv(
    model: &ScatteringModel,
    field: &IntensityField,
    output_path: &Path,
    stride: usize,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    let q = model.grid().axis_values();
    let stride = stride.max(1);

    for row in (0..field.resolution()).step_by(stride) {
        for col in (0..field.resolution()).step_by(stride) {
            wtr.serialize(IntensityRecord {
                qx: q[col],
                qy: q[row],
                intensity: field.get(row, col),
            })?;
        }
    }

    wtr.flush().map_err(|e| SaxsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为矩阵文本
pub fn to_matrix(
    model: &ScatteringModel,
    field: &IntensityField,
    orientation: Orientation,
    output_path: &Path,
    stride: usize,
) -> Result<()> {
    let write_err = |e: std::io::Error| SaxsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    let stride = stride.max(1);
    let cylinder = model.cylinder();
    let q_max = model.grid().q_max();
    let kept = field.resolution().div_ceil(stride);

    writeln!(out, "# SAXS intensity: {}", cylinder).map_err(write_err)?;
    writeln!(
        out,
        "# Rotation: {:.4} deg about {}",
        orientation.angle, orientation.axis
    )
    .map_err(write_err)?;
    writeln!(out, "# q range: [{:.6e}, {:.6e}] (both axes)", -q_max, q_max).map_err(write_err)?;
    writeln!(out, "# Shape: {} x {} (rows = qy, columns = qx)", kept, kept).map_err(write_err)?;

    for row in field.rows().step_by(stride) {
        let line = row
            .iter()
            .step_by(stride)
            .map(|v| format!("{:.6e}", v))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("saxsim_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_csv_export() {
        let model = ScatteringModel::with_resolution(2.0, 10.0, 5).unwrap();
        let path = temp_path("pattern.csv");

        to_csv(&model, model.initial_intensity(), &path, 1).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "qx,qy,intensity");
        assert_eq!(lines.len(), 1 + 25);

        // 中心像素 (row 2, col 2) 为 q = 0
        let center: Vec<&str> = lines[1 + 2 * 5 + 2].split(',').collect();
        assert_eq!(center[2].parse::<f64>().unwrap(), 1.0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_matrix_export_with_stride() {
        let model = ScatteringModel::with_resolution(2.0, 10.0, 7).unwrap();
        let path = temp_path("pattern.dat");
        let orientation = Orientation {
            angle: 30.0,
            axis: Axis::Y,
        };

        let field = model.recompute(30.0, Axis::Y).unwrap();
        to_matrix(&model, &field, orientation, &path, 2).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        let header: Vec<&str> = text.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(header.len(), 4);
        assert!(header[1].contains("about y"));
        assert!(header[3].contains("4 x 4"));

        let rows: Vec<Vec<f64>> = text
            .lines()
            .filter(|l| !l.starts_with('#'))
            .map(|l| l.split_whitespace().map(|v| v.parse().unwrap()).collect())
            .collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 4));
        let corner = field.get(0, 0);
        assert!((rows[0][0] - corner).abs() <= 1e-5 * corner.abs());

        fs::remove_file(&path).ok();
    }
}
