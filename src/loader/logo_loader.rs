use gdk_pixbuf::{InterpType, Pixbuf, PixbufError};
use gtk4::glib::{self, FileError};
use std::path::{Path, PathBuf};

use super::Loader;
use crate::launcher_error;
use crate::utils::config::ConfigLogo;
use crate::utils::errors::{LauncherError, LauncherErrorType};
use crate::utils::files::resolve_relative;

/// Image shown in the header, scaled to exactly `width` x `height`
#[derive(Clone, Debug, PartialEq)]
pub struct LogoAsset {
    pub path: PathBuf,
    pub width: i32,
    pub height: i32,
}
impl LogoAsset {
    /// `None` if the logo is disabled. Relative paths are taken from `base`.
    pub fn from_config(config: &ConfigLogo, base: &Path) -> Option<Self> {
        config.enable.then(|| Self {
            path: resolve_relative(&config.path, base),
            width: config.width,
            height: config.height,
        })
    }
}

impl Loader {
    pub fn load_logo(logo: &LogoAsset) -> Result<Pixbuf, LauncherError> {
        let path = &logo.path;
        log::info!("Attempting to load logo from: {}", path.display());

        if !path.exists() {
            return Err(launcher_error!(
                LauncherErrorType::LogoNotFound(path.clone()),
                ""
            ));
        }

        let original = Pixbuf::from_file(path).map_err(|e| classify_error(path, e))?;
        log::info!(
            "Original logo dimensions: {}x{}",
            original.width(),
            original.height()
        );

        let resized = original
            .scale_simple(logo.width, logo.height, InterpType::Hyper)
            .ok_or_else(|| {
                launcher_error!(
                    LauncherErrorType::LogoDecodeError(path.clone()),
                    format!("failed to scale to {}x{}", logo.width, logo.height)
                )
            })?;

        log::info!("Logo loaded successfully: {}", path.display());
        Ok(resized)
    }
}

fn classify_error(path: &Path, error: glib::Error) -> LauncherError {
    let kind = if error.matches(PixbufError::UnknownType) {
        LauncherErrorType::LogoUnrecognizedFormat(path.to_path_buf())
    } else if error.matches(FileError::Noent) {
        LauncherErrorType::LogoNotFound(path.to_path_buf())
    } else {
        LauncherErrorType::LogoDecodeError(path.to_path_buf())
    };
    launcher_error!(kind, error.message())
}
