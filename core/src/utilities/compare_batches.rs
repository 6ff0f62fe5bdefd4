use serde::{Deserialize, Serialize};

use crate::utilities::find_peaks::pick_anchor_peak;
use crate::utilities::match_peaks::{GreedyRtMatcher, PeakMatcher};
use crate::utilities::rt_shift::{AnchorShift, RtShiftEstimator};
use crate::utilities::structs::{CompareResult, Peak};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Largest accepted distance between a reference rt and a shift-corrected
    /// test rt.
    pub rt_tolerance: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { rt_tolerance: 0.10 }
    }
}

/// Compare a test run against a reference run: anchor-based rt shift, then
/// greedy nearest-rt matching.
pub fn compare_batches<'a>(
    reference: &'a [Peak],
    test: &'a [Peak],
    options: Option<CompareOptions>,
) -> CompareResult<'a> {
    compare_batches_with(reference, test, options, &AnchorShift, &GreedyRtMatcher)
}

pub fn compare_batches_with<'a, E, M>(
    reference: &'a [Peak],
    test: &'a [Peak],
    options: Option<CompareOptions>,
    estimator: &E,
    matcher: &M,
) -> CompareResult<'a>
where
    E: RtShiftEstimator + ?Sized,
    M: PeakMatcher + ?Sized,
{
    let o = options.unwrap_or_default();

    let rt_shift = estimator.estimate_shift(reference, test);
    let mut matching = matcher.match_peaks(reference, test, o.rt_tolerance, rt_shift);
    matching.sort_by_rt();

    tracing::debug!(
        rt_shift,
        matches = matching.matches.len(),
        new = matching.new_peaks.len(),
        lost = matching.lost_peaks.len(),
        "compared peak sets"
    );

    CompareResult {
        matches: matching.matches,
        new_peaks: matching.new_peaks,
        lost_peaks: matching.lost_peaks,
        rt_shift,
        anchor_ref: pick_anchor_peak(reference),
        anchor_test: pick_anchor_peak(test),
    }
}
