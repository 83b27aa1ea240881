use std::env;
use std::path::{Path, PathBuf};

use crate::launcher_error;
use crate::utils::errors::{LauncherError, LauncherErrorType};

pub fn home_dir() -> Result<PathBuf, LauncherError> {
    env::var("HOME")
        .map(PathBuf::from)
        .map_err(|e| launcher_error!(LauncherErrorType::HomeDirError, e.to_string()))
}

pub fn expand_path<T: AsRef<Path>>(path: T, home: &Path) -> PathBuf {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(stripped) => home.join(stripped),
        Err(_) => path.to_path_buf(),
    }
}

/// Directory holding the running executable. Falls back to the working
/// directory if the executable path cannot be determined.
pub fn launcher_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolves `path` against `base` unless it is absolute or home-relative.
pub fn resolve_relative<T: AsRef<Path>>(path: T, base: &Path) -> PathBuf {
    let path = path.as_ref();
    if path.starts_with("~") {
        return match home_dir() {
            Ok(home) => expand_path(path, &home),
            Err(_) => path.to_path_buf(),
        };
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
