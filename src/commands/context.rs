use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::SegmentBarError;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};

/// Load configuration from the filesystem.
///
/// An explicit path is always read. Otherwise `--no-config` yields defaults
/// and the usual search order applies without it.
///
/// # Errors
/// Returns an error if a configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<LoadResult> {
    let loader = FileConfigLoader::new();
    if let Some(path) = config_path {
        return loader.load_from_path(path);
    }
    if no_config {
        debug!("Configuration discovery disabled, using defaults");
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }
    loader.load()
}

/// Write `content` to `output_path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("Wrote {} bytes to {}", content.len(), path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}

/// Print a command failure to stderr.
pub(crate) fn report_error(err: &SegmentBarError) {
    debug!("{} error: {err:?}", err.error_type());
    eprintln!("Error: {err}");
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
