use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub rt: f64,
    pub height: f64,
    pub area: f64,
    pub left: usize,
    pub right: usize,
    pub apex: usize,
    pub prominence: f64,
}

#[inline]
pub(crate) fn by_rt(a: &Peak, b: &Peak) -> Ordering {
    a.rt.total_cmp(&b.rt)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preprocessed {
    pub smoothed: Vec<f64>,
    pub baseline: Vec<f64>,
    pub corrected: Vec<f64>,
}

/// A reference peak paired with a test peak. Both sides borrow from the
/// caller's peak lists.
#[derive(Clone, Debug, Serialize)]
pub struct PeakMatch<'a> {
    #[serde(rename = "ref")]
    pub reference: &'a Peak,
    pub test: &'a Peak,
    /// Shift-corrected test rt minus reference rt.
    pub delta_rt: f64,
    pub area_pct_change: f64,
    pub height_pct_change: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PeakMatching<'a> {
    pub matches: Vec<PeakMatch<'a>>,
    pub new_peaks: Vec<&'a Peak>,
    pub lost_peaks: Vec<&'a Peak>,
}

impl PeakMatching<'_> {
    pub fn sort_by_rt(&mut self) {
        self.matches.sort_by(|a, b| by_rt(a.reference, b.reference));
        self.new_peaks.sort_by(|a, b| by_rt(a, b));
        self.lost_peaks.sort_by(|a, b| by_rt(a, b));
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CompareResult<'a> {
    pub matches: Vec<PeakMatch<'a>>,
    pub new_peaks: Vec<&'a Peak>,
    pub lost_peaks: Vec<&'a Peak>,
    pub rt_shift: f64,
    pub anchor_ref: Option<&'a Peak>,
    pub anchor_test: Option<&'a Peak>,
}
