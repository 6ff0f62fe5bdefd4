use crate::utilities::scan_for_peaks::Prominence;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundaries {
    pub left: usize,
    pub right: usize,
    /// Interpolated crossing positions before truncation.
    pub left_ip: f64,
    pub right_ip: f64,
    pub width_height: f64,
}

/// Width window of the peak at `peak`, measured `rel_height` of its
/// prominence below the apex. Walks toward each base while the signal stays
/// above that level, interpolates the crossing linearly, then truncates the
/// crossing positions and clamps them into `[0, len - 1]`.
pub fn get_boundaries(y: &[f64], peak: usize, prominence: Prominence, rel_height: f64) -> Boundaries {
    let n = y.len();
    let width_height = y[peak] - prominence.value * rel_height;

    let mut i = peak;
    while prominence.left_base < i && width_height < y[i] {
        i -= 1;
    }
    let mut left_ip = i as f64;
    if y[i] < width_height {
        left_ip += (width_height - y[i]) / (y[i + 1] - y[i]);
    }

    let mut i = peak;
    while i < prominence.right_base && width_height < y[i] {
        i += 1;
    }
    let mut right_ip = i as f64;
    if y[i] < width_height {
        right_ip -= (width_height - y[i]) / (y[i - 1] - y[i]);
    }

    let last = n.saturating_sub(1);
    Boundaries {
        left: (left_ip.max(0.0) as usize).min(last),
        right: (right_ip.max(0.0) as usize).min(last),
        left_ip,
        right_ip,
        width_height,
    }
}
