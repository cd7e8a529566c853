//! Configuration file discovery and reading.
//!
//! # File Formats
//!
//! Both JSON5 (`.json5`, with comments and trailing commas) and plain JSON
//! (`.json`) are accepted; the JSON5 parser reads both.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./fourfold.json5` or `./fourfold.json`
//! 2. User: `~/.config/fourfold/config.json5` or `~/.config/fourfold/config.json`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["fourfold.json5", "fourfold.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "fourfold";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first existing candidate, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use fourfold_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Searches `local_dir` and then `<user_config_dir>/fourfold`.
fn find_in(local_dir: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use fourfold_config::persistence::read_config_file;
/// use fourfold_config::Config;
///
/// # fn main() -> fourfold_config::Result<()> {
/// let config: Config = read_config_file("fourfold.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading config file");
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}
