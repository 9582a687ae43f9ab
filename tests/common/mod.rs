#![allow(dead_code)]

pub mod fixtures;

use grr::Fragment;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initialise logging once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds trusted fragments from literal markup.
pub fn fragments(parts: &[&str]) -> Vec<Fragment> {
    parts.iter().map(|p| Fragment::from_trusted(*p)).collect()
}
