mod cat;
mod ls;
mod rm;
mod run;
mod stat;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use samplefs_lib::SampleStore;
use samplefs_lib::stage::{materialize, reingest};

use crate::output::print_skipped;

pub use cat::cmd_cat;
pub use ls::cmd_ls;
pub use rm::cmd_rm;
pub use run::cmd_run;
pub use stat::cmd_stat;

/// Build a store from every regular file under each of `dirs`, keyed relative to its directory.
pub fn load_store(dirs: &[PathBuf]) -> Result<SampleStore> {
  let store = SampleStore::new();

  for dir in dirs {
    if !dir.is_dir() {
      bail!("Sample directory not found: {}", dir.display());
    }

    let report = reingest(&store, dir);
    for skipped in &report.skipped {
      print_skipped("Not loaded", skipped);
    }
    debug!(dir = %dir.display(), loaded = report.ingested.len(), "loaded sample directory");
  }

  Ok(store)
}

/// Write the store out to `dir`, creating it if needed.
pub fn export_store(store: &SampleStore, dir: &Path) -> Result<()> {
  std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

  let report = materialize(store, dir).with_context(|| format!("Failed to export to {}", dir.display()))?;
  for skipped in &report.skipped {
    print_skipped("Not exported", skipped);
  }
  debug!(dir = %dir.display(), written = report.written.len(), "exported store");

  Ok(())
}
