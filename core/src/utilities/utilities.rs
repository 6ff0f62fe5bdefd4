/// Smoothing window for a signal of `n` samples: at least 5, rounded up to the
/// next odd value, and shrunk to the largest odd value not exceeding `n` when
/// it does not fit.
#[inline]
pub fn odd_window(window: usize, n: usize) -> usize {
    let mut w = window.max(5);
    if w % 2 == 0 {
        w += 1;
    }
    if w >= n {
        w = if n % 2 == 1 { n } else { n.saturating_sub(1) };
    }
    w.max(5)
}

/// Trapezoidal area of `y` against `x` over the inclusive index range
/// `[left, right]`. Out of range or inverted bounds integrate to zero.
pub fn integrate_trapz(x: &[f64], y: &[f64], left: usize, right: usize) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 || left >= right || right >= n {
        return 0.0;
    }
    x[left..=right]
        .windows(2)
        .zip(y[left..=right].windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) * 0.5)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_window_rounds_even_up() {
        assert_eq!(odd_window(20, 500), 21);
        assert_eq!(odd_window(21, 500), 21);
        assert_eq!(odd_window(2, 500), 5);
    }

    #[test]
    fn odd_window_fits_short_signals() {
        assert_eq!(odd_window(21, 10), 9);
        assert_eq!(odd_window(21, 11), 11);
        assert_eq!(odd_window(21, 5), 5);
        assert_eq!(odd_window(21, 6), 5);
    }

    #[test]
    fn trapz_of_a_ramp() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 2.0, 3.0];
        assert!((integrate_trapz(&x, &y, 0, 3) - 4.5).abs() < 1e-12);
        assert!((integrate_trapz(&x, &y, 1, 2) - 1.5).abs() < 1e-12);
        assert_eq!(integrate_trapz(&x, &y, 2, 2), 0.0);
        assert_eq!(integrate_trapz(&x, &y, 1, 9), 0.0);
    }
}
