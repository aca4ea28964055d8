// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout helpers: "nice" 1/2/5 x 10^k steps and label formatting.

/// Step between ticks for roughly `count` ticks over `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return f64::NAN;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Tick values covering `[start, stop]` on multiples of [`tick_step`].
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let step = tick_step(lo, hi, count);
    if !step.is_finite() {
        return Vec::new();
    }
    if step < 1.0 {
        // work in whole multiples of 1/step so 0.1 * 3 stays 0.3
        let inv = (1.0 / step).round();
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    } else {
        let i0 = (lo / step).ceil() as i64;
        let i1 = (hi / step).floor() as i64;
        (i0..=i1).map(|i| i as f64 * step).collect()
    }
}

/// Format a tick value with as many decimals as its step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if !step.is_finite() || step >= 1.0 {
        0
    } else {
        (-step.log10() - 1e-9).ceil().max(0.0) as usize
    };
    format!("{:.*}", decimals, value)
}
