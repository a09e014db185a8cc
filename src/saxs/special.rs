//! # 特殊函数
//!
//! 圆柱形状因子所需的特殊函数。
//!
//! ## 函数
//! - `sinc`: 归一化 sinc，sin(πx)/(πx)，sinc(0) = 1，|x| → ∞ 时为 0
//! - `jinc`: J1(x)/x，x = 0 处取解析极限 1/2，|x| → ∞ 时为 0
//!
//! J1(x) 本身只在测试中用于核对参考值。
//!
//! ## 参考
//! - Numerical Recipes in C, 2nd ed., §6.5 (bessj1 有理逼近，绝对误差 ~1e-8)
//!
//! ## 依赖关系
//! - 被 `saxs/form_factor.rs` 调用
//! - 纯数值函数，无外部依赖

use std::f64::consts::PI;

/// 有理逼近区间分界
const SMALL_ARG_LIMIT: f64 = 8.0;

/// 归一化 sinc 函数
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    if px.is_infinite() {
        return 0.0;
    }
    px.sin() / px
}

/// J1(x)/x
///
/// x = 0 为奇点，显式返回极限值 1/2；小参数区间直接使用有理式，
/// 避免 0/0。
pub fn jinc(x: f64) -> f64 {
    if x == 0.0 {
        return 0.5;
    }
    let ax = x.abs();
    if ax < SMALL_ARG_LIMIT {
        small_arg_ratio(x * x)
    } else if ax.is_infinite() {
        0.0
    } else {
        large_arg(ax) / ax
    }
}

/// |x| < 8 时 J1(x)/x 的有理逼近，参数为 y = x²
fn small_arg_ratio(y: f64) -> f64 {
    let num = 72362614232.0
        + y * (-7895059235.0
            + y * (242396853.1 + y * (-2972611.439 + y * (15704.48260 + y * (-30.16036606)))));
    let den = 144725228442.0
        + y * (2300535178.0 + y * (18583304.74 + y * (99447.43394 + y * (376.9991397 + y))));
    num / den
}

/// |x| >= 8 时的渐近展开，参数为 |x|
fn large_arg(ax: f64) -> f64 {
    let z = SMALL_ARG_LIMIT / ax;
    let y = z * z;
    let xx = ax - 2.356194491;

    let p = 1.0
        + y * (0.183105e-2
            + y * (-0.3516396496e-4 + y * (0.2457520174e-5 + y * (-0.240337019e-6))));
    let q = 0.04687499995
        + y * (-0.2002690873e-3
            + y * (0.8449199096e-5 + y * (-0.88228987e-6 + y * 0.105787412e-6)));

    (0.636619772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 第一类一阶 Bessel 函数 J1(x)
    fn bessel_j1(x: f64) -> f64 {
        let ax = x.abs();
        if ax < SMALL_ARG_LIMIT {
            x * small_arg_ratio(x * x)
        } else {
            let ans = large_arg(ax);
            if x < 0.0 {
                -ans
            } else {
                ans
            }
        }
    }

    #[test]
    fn test_sinc_values() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(sinc(-0.0), 1.0);
        for n in 1..5 {
            assert!(sinc(n as f64).abs() < 1e-15, "sinc({}) should vanish", n);
        }
        // sinc(1/2) = 2/π
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-15);
        assert_eq!(sinc(0.3), sinc(-0.3));
    }

    #[test]
    fn test_bessel_j1_reference_values() {
        // 参考值取自 Abramowitz & Stegun Table 9.1
        let cases = [
            (0.0, 0.0),
            (1.0, 0.440_050_585_7),
            (2.0, 0.576_724_807_8),
            (5.0, -0.327_579_137_6),
            (8.0, 0.234_636_346_9),
            (10.0, 0.043_472_746_2),
            (20.0, 0.066_833_124_6),
        ];
        for (x, expected) in cases {
            let got = bessel_j1(x);
            assert!(
                (got - expected).abs() < 1e-7,
                "J1({}) = {}, expected {}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_bessel_j1_odd() {
        for x in [0.7, 3.2, 9.5, 15.0] {
            assert_eq!(bessel_j1(-x), -bessel_j1(x));
        }
    }

    #[test]
    fn test_bessel_j1_first_zero() {
        assert!(bessel_j1(3.831_705_970_2).abs() < 1e-7);
    }

    #[test]
    fn test_jinc_limit_and_consistency() {
        assert_eq!(jinc(0.0), 0.5);
        assert!((jinc(1e-9) - 0.5).abs() < 1e-10);

        for x in [0.3, 2.0, 7.99, 8.01, 12.0, -4.0] {
            let expected = bessel_j1(x) / x;
            assert!(
                (jinc(x) - expected).abs() < 1e-12,
                "jinc({}) inconsistent with J1(x)/x",
                x
            );
        }
    }

    #[test]
    fn test_infinite_arguments_vanish() {
        assert_eq!(sinc(f64::INFINITY), 0.0);
        assert_eq!(sinc(f64::NEG_INFINITY), 0.0);
        // πx 溢出为 inf
        assert_eq!(sinc(1e308), 0.0);
        assert_eq!(jinc(f64::INFINITY), 0.0);
        assert_eq!(jinc(f64::NEG_INFINITY), 0.0);
        assert!(jinc(1e300).is_finite());
    }
}
