//! CLI integration tests for samplefs.

mod common;
mod ls_tests;
mod rm_tests;
mod run_tests;
mod vfs_tests;
