//! Signal conditioning for HPLC chromatograms: noise reduction, baseline
//! drift estimation and a non-negative corrected trace for peak detection.

use serde::{Deserialize, Serialize};

use crate::errors::{HplcError, HplcResult};
use crate::utilities::calculate_baseline::baseline_rolling_min;
use crate::utilities::cheminfo::sgg::{SggOptions, sgg};
use crate::utilities::structs::Preprocessed;
use crate::utilities::utilities::odd_window;

pub const MIN_SIGNAL_LEN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    pub smooth_window: usize,
    pub smooth_poly: usize,
    pub baseline_window: usize,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            smooth_window: 21,
            smooth_poly: 3,
            baseline_window: 200,
        }
    }
}

/// Savitzky–Golay smoothing with a forgiving window/order policy.
///
/// * `window` is raised to 5, rounded up to odd, and shrunk to the largest
///   odd value not exceeding the signal length when it does not fit.
/// * `poly` is clamped to `[2, window - 2]`.
pub fn smooth(signal: &[f64], window: usize, poly: usize) -> HplcResult<Vec<f64>> {
    let n = signal.len();
    if n < MIN_SIGNAL_LEN {
        return Err(HplcError::invalid_input(format!(
            "signal must have at least {MIN_SIGNAL_LEN} points, got {n}"
        )));
    }

    let window_size = odd_window(window, n);
    let polynomial = poly.clamp(2, window_size - 2);

    sgg(
        signal,
        SggOptions {
            window_size,
            derivative: 0,
            polynomial,
            ..Default::default()
        },
    )
}

/// Smooth, estimate the baseline on the smoothed trace, subtract it and clip
/// the result at zero.
pub fn preprocess(
    time: &[f64],
    signal: &[f64],
    options: Option<PreprocessOptions>,
) -> HplcResult<Preprocessed> {
    let opts = options.unwrap_or_default();

    if time.len() != signal.len() {
        return Err(HplcError::invalid_input(format!(
            "time and signal must have the same length ({} vs {})",
            time.len(),
            signal.len()
        )));
    }
    if time.len() < MIN_SIGNAL_LEN {
        return Err(HplcError::invalid_input(format!(
            "chromatogram too short: {} points",
            time.len()
        )));
    }

    let smoothed = smooth(signal, opts.smooth_window, opts.smooth_poly)?;
    let baseline = baseline_rolling_min(&smoothed, opts.baseline_window);
    let corrected = smoothed
        .iter()
        .zip(&baseline)
        .map(|(s, b)| {
            let v = s - b;
            if v > 0.0 { v } else { 0.0 }
        })
        .collect();

    Ok(Preprocessed {
        smoothed,
        baseline,
        corrected,
    })
}
