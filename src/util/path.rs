//! Path helpers: shell expansion and model file lookup.

use std::path::{Path, PathBuf};

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input as is.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Resolve a model path given on the command line.
///
/// Expanded paths that exist (or are absolute) are used directly, other
/// relative paths are looked up in `model_dir`.
pub fn resolve_model_path(path: &Path, model_dir: &Path) -> PathBuf {
    let expanded = PathBuf::from(expand_env_vars(&path.to_string_lossy()));
    if expanded.is_absolute() || expanded.exists() {
        return expanded;
    }
    let candidate = model_dir.join(&expanded);
    if candidate.exists() {
        candidate
    } else {
        expanded
    }
}
