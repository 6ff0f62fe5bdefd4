pub mod sgg;
pub use sgg::{SggOptions, sgg};
