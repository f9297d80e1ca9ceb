use std::path::{Path, PathBuf};

/// Resolve the bazi root directory.
///
/// Priority:
/// 1. `--root` flag / `BAZI_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.bazi/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_bazi_dir(&cwd).unwrap_or(cwd)
}

fn find_bazi_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(bazi_core::paths::BAZI_DIR).is_dir())
        .map(Path::to_path_buf)
}
