//! samplefs-lib: an in-memory sample store that can stand in for the filesystem
//!
//! This crate provides the pieces a demonstration environment needs to work
//! against named byte blobs as if they were files:
//! - `SampleStore`: the name -> bytes mapping everything else reads and writes through
//! - `VirtualFs`: open/stat calls that redirect eligible paths into the store
//! - `StagedRunner`: runs an external process against a temporary on-disk copy
//!   of the store and folds whatever it produced back in
//! - `metadata`: synthetic status records for virtual entries

pub mod config;
pub mod consts;
pub mod metadata;
pub mod platform;
pub mod stage;
pub mod store;
pub mod util;
pub mod vfs;

pub use config::VfsConfig;
pub use metadata::{FileStatus, SyntheticStat};
pub use stage::{StageError, StagedOutput, StagedRunner};
pub use store::{SampleListing, SampleStore, StoreError};
pub use vfs::{OpenMode, OpenTarget, VirtualFile, VirtualFs};
