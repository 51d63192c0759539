//! Property-based tests for logging.
//!
//! These tests verify the file names produced by `compute_rolled_file_path` for arbitrary
//! base paths, dates and indices.
//!
//!   Refer to `src/logging/mod.rs` for more details.
use kittens_api::logging::compute_rolled_file_path;
use proptest::{prelude::*, test_runner::Config};

proptest! {
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  /// A ".log" suffix on the base is replaced by the date and index.
  #[test]
  fn prop_compute_rolled_file_path_with_log_suffix(
    base in "[a-zA-Z0-9_/]{1,30}",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..1000
  ) {
      let result = compute_rolled_file_path(&format!("{}.log", base), &date, index);
      prop_assert_eq!(result, format!("{}-{}.{}.log", base, date, index));
  }

  /// Any other base keeps its full name.
  #[test]
  fn prop_compute_rolled_file_path_without_log_suffix(
    base in ".*",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}"
  ) {
      let base_non_log = if base.ends_with(".log") {
        format!("{}x", base)
      } else {
        base
      };
      let result = compute_rolled_file_path(&base_non_log, &date, 1);
      prop_assert_eq!(result, format!("{}-{}.1.log", base_non_log, date));
  }
}
