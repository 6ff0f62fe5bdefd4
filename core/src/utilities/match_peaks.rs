use std::collections::HashSet;

use crate::utilities::structs::{Peak, PeakMatch, PeakMatching, by_rt};

/// Pairs reference peaks with test peaks after the test axis has been moved
/// by `rt_shift`. Every peak ends up in exactly one of matches, new or lost.
pub trait PeakMatcher {
    fn match_peaks<'a>(
        &self,
        reference: &'a [Peak],
        test: &'a [Peak],
        rt_tolerance: f64,
        rt_shift: f64,
    ) -> PeakMatching<'a>;
}

/// First-fit nearest-rt assignment in ascending reference order.
///
/// Each reference peak takes the closest still unused test peak within
/// tolerance; on equal distance the first one scanned wins. Not a global
/// optimum: an earlier reference peak can claim a test peak that sits closer
/// to a later one.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyRtMatcher;

impl PeakMatcher for GreedyRtMatcher {
    fn match_peaks<'a>(
        &self,
        reference: &'a [Peak],
        test: &'a [Peak],
        rt_tolerance: f64,
        rt_shift: f64,
    ) -> PeakMatching<'a> {
        let adjusted: Vec<f64> = test.iter().map(|p| p.rt - rt_shift).collect();

        let mut ref_order: Vec<&'a Peak> = reference.iter().collect();
        ref_order.sort_by(|a, b| by_rt(a, b));

        let mut used_test: HashSet<usize> = HashSet::with_capacity(test.len());
        let mut matches: Vec<PeakMatch<'a>> = Vec::new();
        let mut lost_peaks: Vec<&'a Peak> = Vec::new();

        for r in ref_order {
            let mut best: Option<(usize, f64)> = None;
            for (j, &adj_rt) in adjusted.iter().enumerate() {
                if used_test.contains(&j) {
                    continue;
                }
                let d = (adj_rt - r.rt).abs();
                if d <= rt_tolerance && best.is_none_or(|(_, best_d)| d < best_d) {
                    best = Some((j, d));
                }
            }

            match best {
                Some((j, _)) => {
                    used_test.insert(j);
                    let tp = &test[j];
                    matches.push(PeakMatch {
                        reference: r,
                        test: tp,
                        delta_rt: adjusted[j] - r.rt,
                        area_pct_change: pct_change(tp.area, r.area),
                        height_pct_change: pct_change(tp.height, r.height),
                    });
                }
                None => lost_peaks.push(r),
            }
        }

        let new_peaks: Vec<&'a Peak> = test
            .iter()
            .enumerate()
            .filter(|(j, _)| !used_test.contains(j))
            .map(|(_, p)| p)
            .collect();

        let mut matching = PeakMatching {
            matches,
            new_peaks,
            lost_peaks,
        };
        matching.sort_by_rt();
        matching
    }
}

pub fn match_peaks_by_rt<'a>(
    reference: &'a [Peak],
    test: &'a [Peak],
    rt_tolerance: f64,
    rt_shift: f64,
) -> PeakMatching<'a> {
    GreedyRtMatcher.match_peaks(reference, test, rt_tolerance, rt_shift)
}

/// Signed percent change of `new` relative to `old`. Growth from zero is
/// unbounded (`+inf`); zero to zero is no change.
#[inline]
pub fn pct_change(new: f64, old: f64) -> f64 {
    if old == 0.0 {
        return if new != 0.0 { f64::INFINITY } else { 0.0 };
    }
    (new - old) / old * 100.0
}
