use crate::utilities::find_peaks::pick_anchor_peak;
use crate::utilities::structs::Peak;

/// Global retention-time offset between two runs, `test - reference`.
/// Aligning a test peak onto the reference axis is `test.rt - shift`.
pub trait RtShiftEstimator {
    fn estimate_shift(&self, reference: &[Peak], test: &[Peak]) -> f64;
}

/// Uses the drift of the tallest peak as the shift for the whole run.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorShift;

impl RtShiftEstimator for AnchorShift {
    fn estimate_shift(&self, reference: &[Peak], test: &[Peak]) -> f64 {
        match (pick_anchor_peak(reference), pick_anchor_peak(test)) {
            (Some(a_ref), Some(a_test)) => a_test.rt - a_ref.rt,
            _ => 0.0,
        }
    }
}

pub fn estimate_rt_shift(reference: &[Peak], test: &[Peak]) -> f64 {
    AnchorShift.estimate_shift(reference, test)
}
