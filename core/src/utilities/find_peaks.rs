use serde::{Deserialize, Serialize};

use crate::utilities::get_boundaries::get_boundaries;
use crate::utilities::scan_for_peaks::{local_maxima, peak_prominence, select_by_peak_distance};
use crate::utilities::structs::{Peak, by_rt};
use crate::utilities::utilities::integrate_trapz;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectPeaksOptions {
    /// Minimal prominence for a local maximum to count as a peak.
    pub prominence: f64,
    /// Minimal spacing between retained apexes, in samples.
    pub distance_pts: usize,
    /// Fraction of the prominence, measured down from the apex, at which the
    /// integration window is taken.
    pub rel_height: f64,
}

impl Default for DetectPeaksOptions {
    fn default() -> Self {
        Self {
            prominence: 1.0,
            distance_pts: 10,
            rel_height: 0.5,
        }
    }
}

/// Detect peaks on a baseline-corrected trace.
///
/// Local maxima are filtered by prominence, then thinned so that no two
/// apexes are closer than `distance_pts` samples (the less prominent one
/// goes). Each survivor gets a half-height window `[left, right]` and the
/// trapezoidal area of `signal` over that window.
///
/// Returns peaks sorted by retention time. Finding nothing is not an error.
pub fn detect_peaks(time: &[f64], signal: &[f64], options: Option<DetectPeaksOptions>) -> Vec<Peak> {
    let o = options.unwrap_or_default();

    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }
    if time.len() != n {
        tracing::warn!(
            time_len = time.len(),
            signal_len = n,
            "time and signal lengths differ, no peaks detected"
        );
        return Vec::new();
    }

    let mut apexes = Vec::new();
    let mut prominences = Vec::new();
    for idx in local_maxima(signal) {
        let p = peak_prominence(signal, idx);
        if p.value >= o.prominence {
            apexes.push(idx);
            prominences.push(p);
        }
    }
    if apexes.is_empty() {
        tracing::debug!(samples = n, "no peaks above prominence threshold");
        return Vec::new();
    }

    let priority: Vec<f64> = prominences.iter().map(|p| p.value).collect();
    let keep = select_by_peak_distance(&apexes, &priority, o.distance_pts);

    let mut peaks: Vec<Peak> = apexes
        .iter()
        .zip(&prominences)
        .zip(&keep)
        .filter(|(_, kept)| **kept)
        .map(|((&apex, &prominence), _)| {
            let b = get_boundaries(signal, apex, prominence, o.rel_height);
            Peak {
                rt: time[apex],
                height: signal[apex],
                area: integrate_trapz(time, signal, b.left, b.right),
                left: b.left,
                right: b.right,
                apex,
                prominence: prominence.value,
            }
        })
        .collect();

    peaks.sort_by(by_rt);
    tracing::debug!(
        candidates = apexes.len(),
        peaks = peaks.len(),
        "peak detection finished"
    );
    peaks
}

/// The tallest peak of a run. Ties keep the first peak in input order.
pub fn pick_anchor_peak(peaks: &[Peak]) -> Option<&Peak> {
    let mut best: Option<&Peak> = None;
    for p in peaks {
        match best {
            Some(b) if p.height <= b.height => {}
            _ => best = Some(p),
        }
    }
    best
}
