mod helpers;

use std::ptr;

use helpers::{hplc_run, linspace};
use hplcutils::{
    Buf, CCompareOptions, CDetectOptions, CPreprocessOptions, ERR_INVALID_ARGS, ERR_INVALID_INPUT,
    OK, compare_runs, detect_peaks, free_, preprocess,
};
use serde_json::Value;

fn empty_buf() -> Buf {
    Buf {
        ptr: ptr::null_mut(),
        len: 0,
    }
}

fn take_json(buf: Buf) -> Value {
    let bytes = unsafe { std::slice::from_raw_parts(buf.ptr, buf.len) };
    let v: Value = serde_json::from_slice(bytes).unwrap();
    unsafe { free_(buf.ptr, buf.len) };
    v
}

#[test]
fn preprocess_writes_three_traces() {
    let time = linspace(0.0, 10.0, 300);
    let raw = hplc_run(&time, 0.0, 1.0, false, 0.1, 3);
    let mut out = empty_buf();

    let code = unsafe { preprocess(time.as_ptr(), raw.as_ptr(), time.len(), ptr::null(), &mut out) };
    assert_eq!(code, OK);

    let v = take_json(out);
    for key in ["smoothed", "baseline", "corrected"] {
        assert_eq!(v[key].as_array().unwrap().len(), 300, "{key}");
    }
    assert!(
        v["corrected"]
            .as_array()
            .unwrap()
            .iter()
            .all(|x| x.as_f64().unwrap() >= 0.0)
    );
}

#[test]
fn preprocess_reports_short_trace() {
    let time = [0.0, 1.0, 2.0];
    let raw = [1.0, 2.0, 1.0];
    let opts = CPreprocessOptions {
        smooth_window: 11,
        smooth_poly: 3,
        baseline_window: 50,
    };
    let mut out = empty_buf();
    let code = unsafe { preprocess(time.as_ptr(), raw.as_ptr(), 3, &opts, &mut out) };
    assert_eq!(code, ERR_INVALID_INPUT);
}

#[test]
fn null_pointers_are_rejected() {
    let time = [0.0; 8];
    let mut out = empty_buf();
    let code = unsafe { detect_peaks(time.as_ptr(), ptr::null(), 8, ptr::null(), &mut out) };
    assert_eq!(code, ERR_INVALID_ARGS);
    let code = unsafe { preprocess(time.as_ptr(), time.as_ptr(), 8, ptr::null(), ptr::null_mut()) };
    assert_eq!(code, ERR_INVALID_ARGS);
}

#[test]
fn detect_peaks_serializes_peak_fields() {
    let time = linspace(0.0, 10.0, 101);
    let signal: Vec<f64> = time
        .iter()
        .map(|&t| 4.0 * (-0.5 * ((t - 5.0) / 0.5).powi(2)).exp())
        .collect();
    let opts = CDetectOptions {
        prominence: 1.0,
        distance_pts: 5,
        rel_height: 0.5,
    };
    let mut out = empty_buf();
    let code = unsafe { detect_peaks(time.as_ptr(), signal.as_ptr(), time.len(), &opts, &mut out) };
    assert_eq!(code, OK);

    let v = take_json(out);
    let peaks = v.as_array().unwrap();
    assert_eq!(peaks.len(), 1);
    let p = &peaks[0];
    assert_eq!(p["apex"].as_u64(), Some(50));
    assert!((p["rt"].as_f64().unwrap() - 5.0).abs() < 1e-9);
    assert!(p["left"].as_u64().unwrap() < 50 && p["right"].as_u64().unwrap() > 50);
}

#[test]
fn compare_runs_reports_shift_and_new_peak() {
    let time = linspace(0.0, 10.0, 500);
    let ref_raw = hplc_run(&time, 0.0, 1.0, false, 0.2, 0);
    let test_raw = hplc_run(&time, 0.08, 0.95, true, 0.2, 5000);
    let opts = CCompareOptions {
        preprocess: CPreprocessOptions {
            smooth_window: 21,
            smooth_poly: 3,
            baseline_window: 200,
        },
        detect: CDetectOptions {
            prominence: 1.0,
            distance_pts: 20,
            rel_height: 0.5,
        },
        rt_tolerance: 0.12,
    };
    let mut out = empty_buf();

    let code = unsafe {
        compare_runs(
            time.as_ptr(),
            ref_raw.as_ptr(),
            test_raw.as_ptr(),
            time.len(),
            &opts,
            &mut out,
        )
    };
    assert_eq!(code, OK);

    let v = take_json(out);
    assert_eq!(v["matches"].as_array().unwrap().len(), 2);
    assert_eq!(v["new_peaks"].as_array().unwrap().len(), 1);
    assert!(v["lost_peaks"].as_array().unwrap().is_empty());
    let shift = v["rt_shift"].as_f64().unwrap();
    assert!((shift - 0.08).abs() <= 0.045, "shift {shift}");
    assert!(v["matches"][0]["ref"]["rt"].as_f64().is_some());
    assert!(v["anchor_test"]["height"].as_f64().is_some());
}
