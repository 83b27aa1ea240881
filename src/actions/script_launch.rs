use gio::glib::{self, GString};
use gio::{Subprocess, SubprocessFlags};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::{
    launcher_error,
    utils::errors::{LauncherError, LauncherErrorType},
};

/// Starts a script without waiting for it
pub trait ScriptSpawner {
    fn spawn(&self, script: &Path) -> Result<(), LauncherError>;
}

/// Runs `<interpreter> <script>` as an independent OS process
#[derive(Clone, Debug)]
pub struct ProcessSpawner {
    interpreter: PathBuf,
}
impl ProcessSpawner {
    pub fn new<T: Into<PathBuf>>(interpreter: T) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
    pub fn argv(&self, script: &Path) -> Vec<OsString> {
        vec![
            self.interpreter.clone().into_os_string(),
            script.as_os_str().to_os_string(),
        ]
    }
}
impl ScriptSpawner for ProcessSpawner {
    fn spawn(&self, script: &Path) -> Result<(), LauncherError> {
        let raw_command = format!("{} {}", self.interpreter.display(), script.display());
        log::info!(r#"Spawning command "{}""#, raw_command);

        match launch_detached(&self.argv(script)) {
            Ok(pid) => {
                log::info!(
                    "Detached process started: {} (pid {}).",
                    raw_command,
                    pid.as_deref().unwrap_or("already exited")
                );
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to detach command: {}\nError: {}", raw_command, e);
                Err(launcher_error!(
                    LauncherErrorType::ScriptLaunchError(script.to_string_lossy().to_string()),
                    e.message()
                ))
            }
        }
    }
}

/// Spawns `argv` and drops the handle. Stdio is inherited; the working
/// directory and environment are the launcher's. GLib's child watch reaps
/// the process once it exits. Returns the pid if the child is still running.
pub fn launch_detached(argv: &[OsString]) -> Result<Option<GString>, glib::Error> {
    let argv: Vec<&OsStr> = argv.iter().map(OsString::as_os_str).collect();
    let child = Subprocess::newv(&argv, SubprocessFlags::STDIN_INHERIT)?;
    Ok(child.identifier())
}
