use std::collections::VecDeque;

pub const MIN_BASELINE_WINDOW: usize = 10;

/// Rolling minimum over a centered window of `max(10, window)` samples.
///
/// The window for sample `i` spans `[i - w/2, i + w/2]` and is truncated at
/// both ends of the trace, so it shrinks near the edges instead of padding.
/// A monotonic deque keeps the whole pass linear in the signal length.
pub fn baseline_rolling_min(signal: &[f64], window: usize) -> Vec<f64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let half = window.max(MIN_BASELINE_WINDOW) / 2;
    let mut baseline = Vec::with_capacity(n);
    let mut candidates: VecDeque<usize> = VecDeque::new();
    let mut next = 0usize;

    for i in 0..n {
        let hi = (i + half).min(n - 1);
        while next <= hi {
            while let Some(&back) = candidates.back() {
                if signal[back] >= signal[next] {
                    candidates.pop_back();
                } else {
                    break;
                }
            }
            candidates.push_back(next);
            next += 1;
        }

        let lo = i.saturating_sub(half);
        while let Some(&front) = candidates.front() {
            if front < lo {
                candidates.pop_front();
            } else {
                break;
            }
        }

        match candidates.front() {
            Some(&k) => baseline.push(signal[k]),
            None => baseline.push(signal[i]),
        }
    }

    baseline
}
