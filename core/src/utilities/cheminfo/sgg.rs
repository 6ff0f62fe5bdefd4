//! Savitzky–Golay (generalized) smoothing and derivatives.
//!
//! Convolution weights are built from Gram polynomials, so one table serves
//! every position of the window. The first and last `half` samples are
//! evaluated on the polynomial fitted to the first/last full window instead
//! of padding the signal.
//!
//! # References
//! * Peter A. Gorry, (1990).
//! “General Least-Squares Smoothing and Differentiation by the Convolution (Savitzky–Golay) Method.”
//! * A. Savitzky, M. J. E. Golay, (1964).
//! “Smoothing and Differentiation of Data by Simplified Least Squares Procedures.”

use serde::{Deserialize, Serialize};

use crate::errors::{HplcError, HplcResult};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SggOptions {
    pub window_size: usize,
    pub derivative: usize,
    pub polynomial: usize,
    /// Sample spacing, only used to scale derivatives.
    pub delta: f64,
}

impl Default for SggOptions {
    fn default() -> Self {
        Self {
            window_size: 9,
            derivative: 0,
            polynomial: 3,
            delta: 1.0,
        }
    }
}

pub fn sgg(ys: &[f64], opts: SggOptions) -> HplcResult<Vec<f64>> {
    let SggOptions {
        window_size,
        derivative,
        polynomial,
        delta,
    } = opts;

    if window_size % 2 == 0 || window_size < 5 {
        return Err(HplcError::invalid_input(format!(
            "window size must be odd and at least 5, got {window_size}"
        )));
    }
    if window_size > ys.len() {
        return Err(HplcError::invalid_input(format!(
            "window size is higher than the data length {}>{}",
            window_size,
            ys.len()
        )));
    }
    if polynomial < 1 || polynomial >= window_size {
        return Err(HplcError::invalid_input(format!(
            "polynomial order must be in [1, {}], got {polynomial}",
            window_size - 1
        )));
    }
    if derivative > 0 && !(delta.is_finite() && delta > 0.0) {
        return Err(HplcError::invalid_input(format!(
            "sample spacing must be positive for derivatives, got {delta}"
        )));
    }
    if polynomial >= 6 {
        tracing::warn!(
            polynomial,
            "polynomial grade higher than 5 may oscillate unless the data arises from such a model"
        );
    }

    let np = ys.len();
    let half = window_size / 2;
    let weights = full_weights(window_size, polynomial, derivative);
    let scale = if derivative == 0 {
        1.0
    } else {
        delta.powi(derivative as i32)
    };

    let mut ans = vec![0.0f64; np];

    let head = &ys[..window_size];
    let tail = &ys[np - window_size..];
    for k in 0..half {
        ans[k] = dot(&weights[k], head) / scale;
        ans[np - half + k] = dot(&weights[half + 1 + k], tail) / scale;
    }

    let center = &weights[half];
    for (offset, window) in ys.windows(window_size).enumerate() {
        ans[offset + half] = dot(center, window) / scale;
    }

    Ok(ans)
}

#[inline]
fn dot(weights: &[f64], values: &[f64]) -> f64 {
    weights.iter().zip(values).map(|(w, v)| w * v).sum()
}

fn gen_fact(a: i32, b: i32) -> f64 {
    if a < b {
        return 1.0;
    }
    (a - b + 1..=a).map(|j| j as f64).product()
}

/// `weights[row][column]`: contribution of sample `column` of a window to the
/// fitted value (or derivative) at position `row` of the same window.
fn full_weights(window_size: usize, polynomial: usize, derivative: usize) -> Vec<Vec<f64>> {
    let half_window = (window_size / 2) as i32;
    let degree = polynomial as i32;

    let coefficient_by_order: Vec<f64> = (0..=degree)
        .map(|order| {
            let numerator = gen_fact(2 * half_window, order);
            let denominator = gen_fact(2 * half_window + order + 1, order + 1);
            (2 * order + 1) as f64 * (numerator / denominator)
        })
        .collect();

    let gram_tables: Vec<Vec<Vec<f64>>> = (-half_window..=half_window)
        .map(|position| gram_table(position, half_window, degree, derivative))
        .collect();

    let mut weights = vec![vec![0.0f64; window_size]; window_size];
    for (row, row_gram) in gram_tables.iter().enumerate() {
        for (column, column_gram) in gram_tables.iter().enumerate() {
            weights[row][column] = coefficient_by_order
                .iter()
                .enumerate()
                .map(|(order, c)| c * column_gram[order][0] * row_gram[order][derivative])
                .sum();
        }
    }
    weights
}

/// Gram polynomial values `gram[order][derivative]` at `position` for a window
/// of half-width `m`, built with the three-term recurrence.
fn gram_table(position: i32, m: i32, degree: i32, derivative: usize) -> Vec<Vec<f64>> {
    let max_order = degree as usize;
    let mut gram = vec![vec![0.0f64; derivative + 1]; max_order + 1];
    gram[0][0] = 1.0;

    let t = position as f64;
    for order in 1..=max_order {
        let k = order as i32;
        let denominator = (k * (2 * m - k + 1)) as f64;
        let a = (4 * k - 2) as f64 / denominator;
        let b = ((k - 1) * (2 * m + k)) as f64 / denominator;

        for d in 0..=derivative {
            let mut mixed_term = t * gram[order - 1][d];
            if d > 0 {
                mixed_term += d as f64 * gram[order - 1][d - 1];
            }
            let two_orders_back = if order >= 2 { gram[order - 2][d] } else { 0.0 };
            gram[order][d] = a * mixed_term - b * two_orders_back;
        }
    }
    gram
}
