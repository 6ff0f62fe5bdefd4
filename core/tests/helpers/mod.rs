use hplcutils::utilities::structs::Peak;

#[allow(dead_code)]
pub fn dump_peaks(peaks: &[Peak]) {
    println!("peaks.len() = {}", peaks.len());
    for (i, p) in peaks.iter().enumerate() {
        println!(
            "#{:03} rt={:.4} height={:.3} area={:.4} prominence={:.3} [{}, {}] apex={}",
            i, p.rt, p.height, p.area, p.prominence, p.left, p.right, p.apex
        );
    }
}

#[inline]
#[allow(dead_code)]
pub fn gaussian_value(x: f64, mu: f64, sigma: f64, amp: f64, base: f64) -> f64 {
    base + amp * (-0.5 * ((x - mu) / sigma).powi(2)).exp()
}

#[allow(dead_code)]
pub fn make_grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![start];
    }
    (0..n)
        .map(|i| start + (end - start) * (i as f64) / ((n - 1) as f64))
        .collect()
}

#[allow(dead_code)]
pub fn linspace(from: f64, to: f64, n: usize) -> Vec<f64> {
    make_grid(from, to, n)
}

/// Deterministic pseudo-noise in `[-0.5, 0.5]`.
#[allow(dead_code)]
pub fn jitter(i: u32) -> f64 {
    let mut x = i.wrapping_mul(1664525).wrapping_add(1013904223);
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    (x as f64 / (u32::MAX as f64)) - 0.5
}

#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Synthetic HPLC run: `5 + 0.2 t` drift, Gaussians at `4 + shift`
/// (height 10, σ 0.2) and `7 + shift` (height 6, σ 0.25), an optional small
/// peak at `2.5 + shift` (height 3.5, σ 0.12) and ±`noise` jitter seeded by
/// `seed`.
#[allow(dead_code)]
pub fn hplc_run(time: &[f64], shift: f64, scale: f64, extra_peak: bool, noise: f64, seed: u32) -> Vec<f64> {
    time.iter()
        .enumerate()
        .map(|(i, &t)| {
            let mut y = 5.0 + 0.2 * t;
            y += gaussian_value(t, 4.0 + shift, 0.2, 10.0 * scale, 0.0);
            y += gaussian_value(t, 7.0 + shift, 0.25, 6.0 * scale, 0.0);
            if extra_peak {
                y += gaussian_value(t, 2.5 + shift, 0.12, 3.5, 0.0);
            }
            y + 2.0 * noise * jitter(seed.wrapping_add(i as u32))
        })
        .collect()
}

#[allow(dead_code)]
pub fn peak(rt: f64, height: f64, area: f64) -> Peak {
    Peak {
        rt,
        height,
        area,
        ..Default::default()
    }
}
