//! # 散射强度场
//!
//! 与采样网格同形状的二维非负实数数组，行主序存储。
//!
//! ## 依赖关系
//! - 由 `saxs/model.rs` 生成
//! - 被 `saxs/export.rs` 和 `commands/` 使用

/// 强度场统计量
#[derive(Debug, Clone, Copy)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// 积分强度（所有像素之和）
    pub total: f64,
}

/// 二维散射强度场
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    resolution: usize,
    values: Vec<f64>,
}

impl IntensityField {
    /// 由行主序数据创建，`values.len()` 必须等于 `resolution²`
    pub fn new(resolution: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), resolution * resolution);
        IntensityField { resolution, values }
    }

    /// 每边像素数
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// 行主序原始数据
    #[cfg(test)]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 读取 (row, col) 处的强度
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.resolution + col]
    }

    /// 按行迭代
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.resolution)
    }

    /// 统计最小值、最大值、均值和总和
    pub fn stats(&self) -> FieldStats {
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = self.values.iter().sum();
        let mean = if self.values.is_empty() {
            0.0
        } else {
            total / self.values.len() as f64
        };

        FieldStats {
            min,
            max,
            mean,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access() {
        let field = IntensityField::new(2, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(field.get(0, 1), 1.0);
        assert_eq!(field.get(1, 0), 2.0);

        let rows: Vec<&[f64]> = field.rows().collect();
        assert_eq!(rows, vec![&[0.0, 1.0][..], &[2.0, 3.0][..]]);
    }

    #[test]
    fn test_field_stats() {
        let field = IntensityField::new(2, vec![0.5, 1.0, 0.0, 2.5]);
        let stats = field.stats();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 2.5);
        assert!((stats.total - 4.0).abs() < 1e-12);
        assert!((stats.mean - 1.0).abs() < 1e-12);
    }
}
