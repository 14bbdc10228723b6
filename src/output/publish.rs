//! Copying rendered charts to the dashboard directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Copy a rendered chart into the dashboard directory.
///
/// Creates the directory if it does not exist and returns the destination
/// path. The copy replaces any previous chart at the destination.
pub fn publish_chart(source: &Path, dashboard_dir: &Path, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dashboard_dir).map_err(|e| Error::Publish {
        from: source.to_path_buf(),
        to: dashboard_dir.to_path_buf(),
        source: e,
    })?;

    let destination = dashboard_dir.join(filename);
    std::fs::copy(source, &destination).map_err(|e| Error::Publish {
        from: source.to_path_buf(),
        to: destination.clone(),
        source: e,
    })?;

    debug!("Published {} -> {}", source.display(), destination.display());
    Ok(destination)
}
