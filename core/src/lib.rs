use core::ffi::c_int;

use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    ptr, slice,
};

pub mod errors;
pub mod utilities;

pub use errors::{HplcError, HplcResult};
use utilities::{
    compare_batches::{CompareOptions, compare_batches as compare_batches_rs},
    find_peaks::{DetectPeaksOptions, detect_peaks as detect_peaks_rs},
    preprocess::{PreprocessOptions, preprocess as preprocess_rs},
};

pub const OK: c_int = 0;
pub const ERR_INVALID_ARGS: c_int = 1;
pub const ERR_PANIC: c_int = 2;
pub const ERR_INVALID_INPUT: c_int = 3;
pub const ERR_ENCODE: c_int = 5;

#[repr(C)]
pub struct Buf {
    pub ptr: *mut u8,
    pub len: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CPreprocessOptions {
    pub smooth_window: c_int,
    pub smooth_poly: c_int,
    pub baseline_window: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CDetectOptions {
    pub prominence: f64,
    pub distance_pts: c_int,
    pub rel_height: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CCompareOptions {
    pub preprocess: CPreprocessOptions,
    pub detect: CDetectOptions,
    pub rt_tolerance: f64,
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn alloc(size: usize) -> *mut u8 {
    if size == 0 {
        return core::ptr::null_mut();
    }
    let mut v = Vec::<u8>::with_capacity(size);
    let p = v.as_mut_ptr();
    core::mem::forget(v);
    p
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_(ptr_raw: *mut u8, len: usize) {
    if !ptr_raw.is_null() {
        let slice = unsafe { core::slice::from_raw_parts_mut(ptr_raw, len) };
        drop(unsafe { Box::<[u8]>::from_raw(slice) });
    }
}

/// Writes `{"smoothed": [...], "baseline": [...], "corrected": [...]}`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn preprocess(
    time_ptr: *const f64,
    signal_ptr: *const f64,
    len: usize,
    options: *const CPreprocessOptions,
    out_json: *mut Buf,
) -> c_int {
    if time_ptr.is_null() || signal_ptr.is_null() || out_json.is_null() {
        return ERR_INVALID_ARGS;
    }
    let res = catch_unwind(AssertUnwindSafe(|| -> Result<(), c_int> {
        let time = unsafe { slice::from_raw_parts(time_ptr, len) };
        let signal = unsafe { slice::from_raw_parts(signal_ptr, len) };
        let opts = build_preprocess_options(unsafe { options.as_ref() });

        let out = preprocess_rs(time, signal, Some(opts)).map_err(error_code)?;
        let s = serde_json::to_string(&out).map_err(|_| ERR_ENCODE)?;
        write_buf(out_json, s.into_bytes().into_boxed_slice());
        Ok(())
    }));
    status(res)
}

/// Writes the detected peaks as a JSON array.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn detect_peaks(
    time_ptr: *const f64,
    signal_ptr: *const f64,
    len: usize,
    options: *const CDetectOptions,
    out_json: *mut Buf,
) -> c_int {
    if time_ptr.is_null() || signal_ptr.is_null() || out_json.is_null() {
        return ERR_INVALID_ARGS;
    }
    let res = catch_unwind(AssertUnwindSafe(|| -> Result<(), c_int> {
        let time = unsafe { slice::from_raw_parts(time_ptr, len) };
        let signal = unsafe { slice::from_raw_parts(signal_ptr, len) };
        let opts = build_detect_options(unsafe { options.as_ref() });

        let peaks = detect_peaks_rs(time, signal, Some(opts));
        let s = serde_json::to_string(&peaks).map_err(|_| ERR_ENCODE)?;
        write_buf(out_json, s.into_bytes().into_boxed_slice());
        Ok(())
    }));
    status(res)
}

/// Full pipeline for two raw traces sampled on the same time axis:
/// preprocess, detect, compare. Writes the comparison as JSON. Infinite
/// percent changes serialize as `null`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn compare_runs(
    time_ptr: *const f64,
    ref_ptr: *const f64,
    test_ptr: *const f64,
    len: usize,
    options: *const CCompareOptions,
    out_json: *mut Buf,
) -> c_int {
    if time_ptr.is_null() || ref_ptr.is_null() || test_ptr.is_null() || out_json.is_null() {
        return ERR_INVALID_ARGS;
    }
    let res = catch_unwind(AssertUnwindSafe(|| -> Result<(), c_int> {
        let time = unsafe { slice::from_raw_parts(time_ptr, len) };
        let ref_signal = unsafe { slice::from_raw_parts(ref_ptr, len) };
        let test_signal = unsafe { slice::from_raw_parts(test_ptr, len) };
        let options = unsafe { options.as_ref() };
        let pre = build_preprocess_options(options.map(|o| &o.preprocess));
        let det = build_detect_options(options.map(|o| &o.detect));
        let cmp = build_compare_options(options);

        let reference = preprocess_rs(time, ref_signal, Some(pre)).map_err(error_code)?;
        let test = preprocess_rs(time, test_signal, Some(pre)).map_err(error_code)?;
        let ref_peaks = detect_peaks_rs(time, &reference.corrected, Some(det));
        let test_peaks = detect_peaks_rs(time, &test.corrected, Some(det));

        let result = compare_batches_rs(&ref_peaks, &test_peaks, Some(cmp));
        let s = serde_json::to_string(&result).map_err(|_| ERR_ENCODE)?;
        write_buf(out_json, s.into_bytes().into_boxed_slice());
        Ok(())
    }));
    status(res)
}

fn status(res: std::thread::Result<Result<(), c_int>>) -> c_int {
    match res {
        Ok(Ok(())) => OK,
        Ok(Err(code)) => code,
        Err(_) => ERR_PANIC,
    }
}

fn error_code(err: HplcError) -> c_int {
    tracing::debug!(%err, "rejected input at ffi boundary");
    match err {
        HplcError::InvalidInput(_) => ERR_INVALID_INPUT,
    }
}

fn write_buf(out: *mut Buf, bytes: Box<[u8]>) {
    let len = bytes.len();
    let ptr_bytes = Box::into_raw(bytes) as *mut u8;
    unsafe {
        ptr::write_unaligned(
            out,
            Buf {
                ptr: ptr_bytes,
                len,
            },
        )
    };
}

fn build_preprocess_options(options: Option<&CPreprocessOptions>) -> PreprocessOptions {
    let defaults = PreprocessOptions::default();
    let Some(o) = options else {
        return defaults;
    };
    let positive = |v: c_int| (v > 0).then_some(v as usize);
    PreprocessOptions {
        smooth_window: positive(o.smooth_window).unwrap_or(defaults.smooth_window),
        smooth_poly: positive(o.smooth_poly).unwrap_or(defaults.smooth_poly),
        baseline_window: positive(o.baseline_window).unwrap_or(defaults.baseline_window),
    }
}

fn build_detect_options(options: Option<&CDetectOptions>) -> DetectPeaksOptions {
    let defaults = DetectPeaksOptions::default();
    let Some(o) = options else {
        return defaults;
    };
    let prominence = (o.prominence.is_finite() && o.prominence > 0.0)
        .then_some(o.prominence)
        .unwrap_or(defaults.prominence);
    let distance_pts = (o.distance_pts > 0)
        .then_some(o.distance_pts as usize)
        .unwrap_or(defaults.distance_pts);
    let rel_height = (o.rel_height.is_finite() && o.rel_height > 0.0 && o.rel_height <= 1.0)
        .then_some(o.rel_height)
        .unwrap_or(defaults.rel_height);
    DetectPeaksOptions {
        prominence,
        distance_pts,
        rel_height,
    }
}

fn build_compare_options(options: Option<&CCompareOptions>) -> CompareOptions {
    let defaults = CompareOptions::default();
    match options {
        Some(o) if o.rt_tolerance.is_finite() && o.rt_tolerance >= 0.0 => CompareOptions {
            rt_tolerance: o.rt_tolerance,
        },
        _ => defaults,
    }
}
