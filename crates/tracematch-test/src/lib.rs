//! tracematch-test - Regression test support for the tracematch workspace
//!
//! Provides a small harness for the `tests/*_reg.rs` suites: a named test
//! context that compares computed values against expected ones with a
//! tolerance, records every failure, and reports an overall verdict at the
//! end instead of aborting on the first mismatch.
//!
//! # Usage
//!
//! ```
//! use tracematch_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;
