//! libchange: reports which library dependencies a commit added, removed,
//! upgraded or left unchanged in its Gradle build files.
//!
//! The core pipeline lives in [`analysis`]; [`analyzer`] routes build files
//! to it by dialect, [`batch`] drives it over commits, and [`git`] and
//! [`report`] connect it to a repository and to result files.

pub mod analysis;
pub mod analyzer;
pub mod batch;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;
