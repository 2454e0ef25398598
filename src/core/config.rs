use std::path::PathBuf;
use tracing::debug;

use crate::error::WordGenError;
use crate::models::Config;

/// Load configuration from the working directory
pub fn load_config(dir: &PathBuf) -> Result<Config, WordGenError> {
    let config = Config::load_from_dir(dir)?;

    debug!(
        "Configuration loaded: reference file={}, count={}",
        config.reference.file.display(),
        config.generation.count
    );

    Ok(config)
}
