use std::cmp::Ordering;

/// Indices of local maxima: a strict rise followed by a strict fall. Flat
/// tops report the middle sample (lower middle for an even plateau). The
/// first and last samples never qualify.
pub fn local_maxima(y: &[f64]) -> Vec<usize> {
    let n = y.len();
    let mut maxima = Vec::new();
    if n < 3 {
        return maxima;
    }

    let i_max = n - 1;
    let mut i = 1usize;
    while i < i_max {
        if y[i - 1] < y[i] {
            let mut ahead = i + 1;
            while ahead < i_max && y[ahead] == y[i] {
                ahead += 1;
            }
            if y[ahead] < y[i] {
                let left_edge = i;
                let right_edge = ahead - 1;
                maxima.push((left_edge + right_edge) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    maxima
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prominence {
    pub value: f64,
    pub left_base: usize,
    pub right_base: usize,
}

/// Prominence of the maximum at `peak`: walk outward on each side while the
/// signal stays at or below the apex and keep the lowest point seen. The
/// higher of the two minima is the reference level.
pub fn peak_prominence(y: &[f64], peak: usize) -> Prominence {
    let apex = y[peak];

    let mut left_min = apex;
    let mut left_base = peak;
    let mut i = peak;
    loop {
        if y[i] > apex {
            break;
        }
        if y[i] < left_min {
            left_min = y[i];
            left_base = i;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    let mut right_min = apex;
    let mut right_base = peak;
    for (j, &v) in y.iter().enumerate().skip(peak) {
        if v > apex {
            break;
        }
        if v < right_min {
            right_min = v;
            right_base = j;
        }
    }

    Prominence {
        value: apex - left_min.max(right_min),
        left_base,
        right_base,
    }
}

/// Keep-mask enforcing a minimal sample distance between peaks. Peaks are
/// visited from the highest priority down; each surviving peak removes every
/// neighbour closer than `distance` samples. Equal priorities resolve in
/// favour of the later index.
pub fn select_by_peak_distance(peaks: &[usize], priority: &[f64], distance: usize) -> Vec<bool> {
    let m = peaks.len();
    let mut keep = vec![true; m];
    let distance = distance.max(1);

    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&a, &b| {
        priority[a]
            .partial_cmp(&priority[b])
            .unwrap_or(Ordering::Equal)
    });

    for &j in order.iter().rev() {
        if !keep[j] {
            continue;
        }
        for k in (0..j).rev() {
            if peaks[j] - peaks[k] >= distance {
                break;
            }
            keep[k] = false;
        }
        for k in (j + 1)..m {
            if peaks[k] - peaks[j] >= distance {
                break;
            }
            keep[k] = false;
        }
    }
    keep
}
