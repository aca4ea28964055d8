// File: crates/scatter-core/src/regression.rs
// Summary: Least-squares regression via Pearson correlation (mean, sample deviation, slope, intercept).
// Notes:
// - Degenerate input (n < 2, or zero spread on either axis) yields NaN, never a panic.

use tracing::warn;

use crate::point::Point;

/// Arithmetic mean; NaN for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values.into_iter().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Running count, mean and sum of squared deviations (Welford update).
/// Constant input keeps the squared sum at exactly zero.
#[derive(Clone, Copy, Debug, Default)]
struct Welford {
    n: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn of(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().fold(Self::default(), |mut acc, v| {
            acc.n += 1;
            let delta = v - acc.mean;
            acc.mean += delta / acc.n as f64;
            acc.m2 += delta * (v - acc.mean);
            acc
        })
    }

    fn mean(&self) -> f64 {
        if self.n == 0 { f64::NAN } else { self.mean }
    }

    fn deviation(&self) -> f64 {
        if self.n < 2 { f64::NAN } else { (self.m2 / (self.n - 1) as f64).sqrt() }
    }
}

/// Sample standard deviation (n - 1 denominator); NaN when fewer than two values.
pub fn deviation(values: impl IntoIterator<Item = f64>) -> f64 {
    Welford::of(values).deviation()
}

/// First and second moments of both axes.
#[derive(Clone, Copy, Debug)]
pub struct Moments {
    pub n: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    pub sd_x: f64,
    pub sd_y: f64,
}

impl Moments {
    pub fn of(points: &[Point]) -> Self {
        let x = Welford::of(points.iter().map(|p| p.x));
        let y = Welford::of(points.iter().map(|p| p.y));
        Self { n: points.len(), mean_x: x.mean(), mean_y: y.mean(), sd_x: x.deviation(), sd_y: y.deviation() }
    }

    /// Pearson r: summed products of standardized coordinates over (n - 1).
    pub fn correlation(&self, points: &[Point]) -> f64 {
        if self.n < 2 || self.sd_x == 0.0 || self.sd_y == 0.0 {
            return f64::NAN;
        }
        let sum: f64 = points
            .iter()
            .map(|p| ((p.x - self.mean_x) / self.sd_x) * ((p.y - self.mean_y) / self.sd_y))
            .sum();
        sum / (self.n - 1) as f64
    }
}

pub fn correlation(points: &[Point]) -> f64 {
    Moments::of(points).correlation(points)
}

pub fn slope(points: &[Point]) -> f64 {
    let m = Moments::of(points);
    m.correlation(points) * (m.sd_y / m.sd_x)
}

pub fn intercept(points: &[Point]) -> f64 {
    let m = Moments::of(points);
    let slope = m.correlation(points) * (m.sd_y / m.sd_x);
    m.mean_y - slope * m.mean_x
}

/// Best-fit line `y = slope * x + intercept`, built once per render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionLine {
    pub const fn new(slope: f64, intercept: f64) -> Self { Self { slope, intercept } }

    pub fn fit(points: &[Point]) -> Self {
        let m = Moments::of(points);
        let slope = m.correlation(points) * (m.sd_y / m.sd_x);
        let line = Self { slope, intercept: m.mean_y - slope * m.mean_x };
        if !line.is_defined() {
            warn!(n = points.len(), "regression line undefined for these points");
        }
        line
    }

    #[inline]
    pub fn line_at(&self, x: f64) -> f64 { self.slope * x + self.intercept }

    /// Signed vertical distance from the line to `p`.
    #[inline]
    pub fn residual(&self, p: Point) -> f64 { p.y - self.line_at(p.x) }

    pub fn is_defined(&self) -> bool { self.slope.is_finite() && self.intercept.is_finite() }
}
