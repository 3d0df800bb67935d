pub mod bs;
pub mod greeks;

/// Utility functions shared by the kernels and the surface generator
pub mod utils {
    use statrs::function::erf::erfc;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Written as ½·erfc(−x/√2) rather than ½·(1 + erf(x/√2)) so the left tail keeps
    /// its relative precision; both tails saturate to exactly 0 or 1 for large
    /// finite arguments instead of producing NaN.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x * FRAC_1_SQRT_2)
    }

    /// Standard normal probability density function φ(x)
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

    /// `n` evenly spaced values over `[start, stop]`, endpoints included.
    ///
    /// The last element is pinned to `stop` so accumulated rounding never pushes
    /// the axis past the requested bound.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
                values[n - 1] = stop;
                values
            }
        }
    }

}
