//! # pattern 命令实现
//!
//! 计算圆柱在单一取向下的 SAXS 图样并导出。
//!
//! ## 功能
//! - 构造散射模型（预计算网格与初始强度）
//! - 按角度和轴重算强度
//! - 导出 CSV / 矩阵文本
//! - 打印强度统计表
//!
//! ## 依赖关系
//! - 使用 `cli/pattern.rs` 定义的 PatternArgs
//! - 使用 `saxs/` 模块进行计算与导出
//! - 公共函数被 `commands/sweep.rs` 复用

use crate::cli::pattern::{ExportFormat, ModelArgs, PatternArgs};
use crate::error::{Result, SaxsError};
use crate::models::{FieldStats, IntensityField};
use crate::saxs::export::{self, Orientation};
use crate::saxs::ScatteringModel;
use crate::utils::{output, progress};

use std::borrow::Cow;
use std::path::Path;

/// 执行 pattern 命令
pub fn execute(args: PatternArgs) -> Result<()> {
    output::print_header("Cylinder SAXS Pattern");

    validate_stride(args.stride)?;
    let model = build_model(&args.model)?;

    output::print_info(&format!(
        "Sample rotation: {:.2}° about {}",
        args.angle, args.axis
    ));

    let spinner = progress::create_spinner("Computing scattering intensity");
    let field = model.oriented_intensity(args.angle, args.axis);
    spinner.finish_and_clear();
    let field = field?;
    if matches!(field, Cow::Borrowed(_)) {
        output::print_info("Full-turn rotation, reusing the precomputed unrotated intensity");
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    let orientation = Orientation {
        angle: args.angle,
        axis: args.axis,
    };
    export_field(&model, &field, orientation, &args.output, format, args.stride)?;

    print_stats_table(&field.stats());
    output::print_success(&format!(
        "Pattern saved to '{}' ({})",
        args.output.display(),
        format
    ));

    Ok(())
}

/// 构造散射模型并打印参数
pub fn build_model(args: &ModelArgs) -> Result<ScatteringModel> {
    let spinner = progress::create_spinner("Precomputing sampling grid");
    let model = ScatteringModel::with_resolution(args.radius, args.height, args.points);
    spinner.finish_and_clear();
    let model = model?;

    output::print_success(&format!(
        "Model ready: {}, {} x {} grid",
        model.cylinder(),
        args.points,
        args.points
    ));
    output::print_info(&format!(
        "Aspect ratio H/2R = {:.3}, q window: ±{:.4} (1/length unit)",
        model.cylinder().aspect_ratio(),
        model.grid().q_max()
    ));

    Ok(model)
}

/// 按格式导出强度场
pub fn export_field(
    model: &ScatteringModel,
    field: &IntensityField,
    orientation: Orientation,
    path: &Path,
    format: ExportFormat,
    stride: usize,
) -> Result<()> {
    match format {
        ExportFormat::Csv => export::to_csv(model, field, path, stride),
        ExportFormat::Matrix => export::to_matrix(model, field, orientation, path, stride),
    }
}

/// 校验抽样间隔
pub fn validate_stride(stride: usize) -> Result<()> {
    if stride == 0 {
        return Err(SaxsError::InvalidArgument(
            "stride must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ExportFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("csv") => ExportFormat::Csv,
        _ => ExportFormat::Matrix,
    }
}

/// 打印强度统计表
fn print_stats_table(stats: &FieldStats) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct StatRow {
        #[tabled(rename = "Quantity")]
        name: &'static str,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = vec![
        StatRow {
            name: "I min",
            value: format!("{:.4e}", stats.min),
        },
        StatRow {
            name: "I max",
            value: format!("{:.4e}", stats.max),
        },
        StatRow {
            name: "I mean",
            value: format!("{:.4e}", stats.mean),
        },
        StatRow {
            name: "Σ I",
            value: format!("{:.4e}", stats.total),
        },
    ];

    output::print_header("Intensity Statistics");
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_guess_format() {
        assert_eq!(
            guess_format_from_extension(&PathBuf::from("out.CSV")),
            ExportFormat::Csv
        );
        assert_eq!(
            guess_format_from_extension(&PathBuf::from("out.dat")),
            ExportFormat::Matrix
        );
        assert_eq!(
            guess_format_from_extension(&PathBuf::from("pattern")),
            ExportFormat::Matrix
        );
    }

    #[test]
    fn test_validate_stride() {
        assert!(validate_stride(1).is_ok());
        assert!(matches!(
            validate_stride(0),
            Err(SaxsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_build_model_rejects_zero_radius() {
        let args = ModelArgs {
            radius: 0.0,
            height: 10.0,
            points: 16,
        };
        assert!(matches!(
            build_model(&args),
            Err(SaxsError::DegenerateRadius(_))
        ));
    }
}
