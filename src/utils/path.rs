//! Path utilities: expand ~ and validate absolute output paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user-supplied output path; `~/` is expanded before the
/// absolute-path check.
pub fn resolve_output(path: &str) -> Option<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() { Some(p) } else { None }
}
