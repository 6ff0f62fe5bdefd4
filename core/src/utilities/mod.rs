pub mod calculate_baseline;
pub use calculate_baseline::baseline_rolling_min;

pub mod cheminfo;

pub mod compare_batches;
pub use compare_batches::{CompareOptions, compare_batches, compare_batches_with};

pub mod find_peaks;
pub use find_peaks::{DetectPeaksOptions, detect_peaks, pick_anchor_peak};

pub mod get_boundaries;

pub mod match_peaks;
pub use match_peaks::{GreedyRtMatcher, PeakMatcher, match_peaks_by_rt, pct_change};

pub mod preprocess;
pub use preprocess::{PreprocessOptions, preprocess, smooth};

pub mod rt_shift;
pub use rt_shift::{AnchorShift, RtShiftEstimator, estimate_rt_shift};

pub mod scan_for_peaks;

pub mod structs;
pub use structs::{CompareResult, Peak, PeakMatch, PeakMatching, Preprocessed};

pub mod utilities;
pub use utilities::integrate_trapz;
