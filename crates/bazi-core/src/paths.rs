use crate::error::{BaziError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const BAZI_DIR: &str = ".bazi";
pub const CONFIG_FILE: &str = ".bazi/config.yaml";
pub const PROFILES_FILE: &str = ".bazi/profiles.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn bazi_dir(root: &Path) -> PathBuf {
    root.join(BAZI_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn profiles_path(root: &Path) -> PathBuf {
    root.join(PROFILES_FILE)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Trim a profile name and reject it if nothing is left.
pub fn validate_profile_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BaziError::InvalidProfileName(name.to_string()));
    }
    Ok(trimmed)
}
