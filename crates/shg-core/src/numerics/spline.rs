//! Natural cubic spline interpolation over a fixed knot grid.
//!
//! Second derivatives are precomputed once at fit time with a tridiagonal
//! solve; evaluation brackets the query with a binary search and applies the
//! segment polynomial. Queries outside the knot range extrapolate with the
//! boundary segment's cubic, which is deterministic but carries no accuracy
//! guarantee away from the fitted range.

use num_complex::Complex64;

#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    y2: Vec<f64>,
}

impl CubicSpline {
    /// Fits a natural spline. Knots must be strictly increasing and at least
    /// two; returns `None` otherwise.
    pub fn fit(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.len() < 2 || x.len() != y.len() {
            return None;
        }
        if !super::strictly_increasing(x) {
            return None;
        }

        Some(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            y2: second_derivatives(x, y),
        })
    }

    /// Evaluates the spline; exact at knot points.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.x.len();
        let hi = match self.x.partition_point(|&knot| knot < x) {
            index if index >= n => n - 1,
            0 => 1,
            index => index,
        };
        let lo = hi - 1;

        let h = self.x[hi] - self.x[lo];
        let a = (self.x[hi] - x) / h;
        let b = (x - self.x[lo]) / h;

        a * self.y[lo]
            + b * self.y[hi]
            + (h * h / 6.0)
                * ((a * a * a - a) * self.y2[lo] + (b * b * b - b) * self.y2[hi])
    }

    pub fn knots(&self) -> &[f64] {
        &self.x
    }
}

/// Natural boundary conditions: second derivative vanishes at both ends.
fn second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut y2 = vec![0.0; n];
    let mut u = vec![0.0; n];

    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y2[i - 1] + 2.0;
        y2[i] = (sig - 1.0) / p;
        let slope_diff =
            (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (6.0 * slope_diff / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    for i in (0..n - 1).rev() {
        y2[i] = y2[i] * y2[i + 1] + u[i];
    }

    y2
}

/// Complex-valued spline: real and imaginary parts are fit independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSpline {
    real: CubicSpline,
    imag: CubicSpline,
}

impl ComplexSpline {
    pub fn fit(x: &[f64], values: &[Complex64]) -> Option<Self> {
        let real_part: Vec<f64> = values.iter().map(|value| value.re).collect();
        let imag_part: Vec<f64> = values.iter().map(|value| value.im).collect();

        Some(Self {
            real: CubicSpline::fit(x, &real_part)?,
            imag: CubicSpline::fit(x, &imag_part)?,
        })
    }

    pub fn eval_real(&self, x: f64) -> f64 {
        self.real.eval(x)
    }

    pub fn eval_imag(&self, x: f64) -> f64 {
        self.imag.eval(x)
    }

    pub fn eval(&self, x: f64) -> Complex64 {
        Complex64::new(self.real.eval(x), self.imag.eval(x))
    }
}
