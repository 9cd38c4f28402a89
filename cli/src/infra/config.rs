//! Locations of user configuration on disk.

use anyhow::Result;
use std::path::PathBuf;

/// Returns the func configuration root: `$XDG_CONFIG_HOME/func`, falling
/// back to `~/.config/func`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor the home directory can
/// be determined.
pub fn config_root() -> Result<PathBuf> {
    if let Ok(val) = std::env::var("XDG_CONFIG_HOME")
        && !val.is_empty()
    {
        return Ok(PathBuf::from(val).join("func"));
    }
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.join(".config").join("func"))
}

/// Default location of extended template repositories.
///
/// # Errors
///
/// Returns an error if the configuration root cannot be determined.
pub fn repositories_dir() -> Result<PathBuf> {
    Ok(config_root()?.join("repositories"))
}
