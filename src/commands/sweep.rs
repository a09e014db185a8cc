//! # sweep 命令实现
//!
//! 将样品绕指定轴转过一段角度范围，逐帧计算并导出散射图样。
//!
//! ## 功能
//! - 解析角度范围与步长
//! - 模型只构造一次，各帧共享只读引用
//! - 并行计算（rayon），已存在的帧默认跳过
//! - 写出帧索引文件 frames.csv
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `batch/` 模块进行并行处理
//! - 复用 `commands/pattern.rs` 的模型构造与导出

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::pattern::ExportFormat;
use crate::cli::sweep::SweepArgs;
use crate::commands::pattern;
use crate::error::{Result, SaxsError};
use crate::saxs::export::Orientation;
use crate::saxs::{Axis, ScatteringModel};
use crate::utils::output;

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 单次扫描允许的最大帧数
const MAX_FRAMES: usize = 100_000;

/// 帧索引文件名
const MANIFEST_NAME: &str = "frames.csv";

/// 执行 sweep 命令
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Cylinder SAXS Angle Sweep");

    pattern::validate_stride(args.stride)?;
    let (start, end) = parse_range(&args.range)?;
    let angles = sweep_angles(start, end, args.step)?;

    output::print_info(&format!(
        "Sweeping {:.2}° → {:.2}° about {} in {} frames",
        start,
        end,
        args.axis,
        angles.len()
    ));

    fs::create_dir_all(&args.output).map_err(|e| SaxsError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let model = pattern::build_model(&args.model)?;

    let frames = plan_frames(&angles, &args.output, args.format);
    let manifest = args.output.join(MANIFEST_NAME);
    write_manifest(&frames, args.axis, &manifest)?;
    output::print_info(&format!("Frame index written to '{}'", manifest.display()));

    let config = SweepConfig {
        axis: args.axis,
        format: args.format,
        stride: args.stride,
        overwrite: args.overwrite,
    };

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));

    let result = runner.run(&frames, |frame| process_frame(&model, frame, &config))?;

    // 打印统计
    output::print_separator();
    output::print_done(&format!(
        "Sweep complete: {} frames ({} success, {} skipped, {} failed)",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    if let Some(first) = result.skips.first() {
        output::print_warning(&format!(
            "{} (and {} more; pass --overwrite to recompute)",
            first,
            result.skips.len() - 1
        ));
    }

    if !result.failures.is_empty() {
        output::print_warning("Failed frames:");
        for (frame, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", frame, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 单帧任务
#[derive(Debug, Clone)]
struct Frame {
    index: usize,
    angle: f64,
    path: PathBuf,
}

/// 扫描的共享配置
struct SweepConfig {
    axis: Axis,
    format: ExportFormat,
    stride: usize,
    overwrite: bool,
}

/// 帧索引记录
#[derive(Debug, Serialize)]
struct ManifestRecord<'a> {
    index: usize,
    angle_deg: f64,
    axis: String,
    file: &'a str,
}

/// 为每个角度分配输出文件
fn plan_frames(angles: &[f64], output_dir: &Path, format: ExportFormat) -> Vec<Frame> {
    angles
        .iter()
        .enumerate()
        .map(|(index, &angle)| Frame {
            index,
            angle,
            path: output_dir.join(format!("frame_{:04}.{}", index, format.extension())),
        })
        .collect()
}

/// 写出帧索引
fn write_manifest(frames: &[Frame], axis: Axis, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for frame in frames {
        let file = frame
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        wtr.serialize(ManifestRecord {
            index: frame.index,
            angle_deg: frame.angle,
            axis: axis.to_string(),
            file,
        })?;
    }

    wtr.flush().map_err(|e| SaxsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 处理单帧
fn process_frame(model: &ScatteringModel, frame: &Frame, config: &SweepConfig) -> ProcessResult {
    let label = format!("frame {} ({:.2}°)", frame.index, frame.angle);

    if frame.path.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            frame.path.display()
        ));
    }

    let field = match model.oriented_intensity(frame.angle, config.axis) {
        Ok(f) => f,
        Err(e) => return ProcessResult::Failed(label, e.to_string()),
    };

    let orientation = Orientation {
        angle: frame.angle,
        axis: config.axis,
    };

    match pattern::export_field(
        model,
        &field,
        orientation,
        &frame.path,
        config.format,
        config.stride,
    ) {
        Ok(_) => ProcessResult::Success,
        Err(e) => ProcessResult::Failed(label, e.to_string()),
    }
}

/// 解析角度范围 "start-end"（允许负数与指数记法，如 "-90-90"、"1e-3-10"）
fn parse_range(range: &str) -> Result<(f64, f64)> {
    let invalid = || SaxsError::InvalidRange(range.to_string());

    // 分隔符取最后一个紧跟在数字、小数点或空白之后的 '-'，
    // 负号和指数中的 '-' 不满足该条件
    let split_at = range
        .char_indices()
        .zip(range.chars().skip(1))
        .filter(|&((_, prev), c)| c == '-' && (prev.is_ascii_digit() || prev == '.' || prev.is_whitespace()))
        .map(|((i, prev), _)| i + prev.len_utf8())
        .last()
        .ok_or_else(invalid)?;

    let start: f64 = range[..split_at].trim().parse().map_err(|_| invalid())?;
    let end: f64 = range[split_at + 1..].trim().parse().map_err(|_| invalid())?;

    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(SaxsError::InvalidRange(format!(
            "{} (must be finite with start <= end)",
            range
        )));
    }

    Ok((start, end))
}

/// 生成 [start, end] 内步长为 step 的角度序列（含端点）
fn sweep_angles(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SaxsError::InvalidArgument(format!(
            "angle step must be a finite value > 0, got {}",
            step
        )));
    }

    let intervals = ((end - start) / step + 1e-9).floor();
    if intervals >= MAX_FRAMES as f64 {
        return Err(SaxsError::InvalidArgument(format!(
            "sweep would produce more than {} frames",
            MAX_FRAMES
        )));
    }

    let count = intervals as usize + 1;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}
