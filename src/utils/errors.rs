use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

#[macro_export]
macro_rules! launcher_error {
    ($errtype:expr, $source:expr) => {
        $crate::utils::errors::LauncherError {
            error: $errtype,
            traceback: $source.to_string(),
        }
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct LauncherError {
    pub error: LauncherErrorType,
    pub traceback: String,
}
impl LauncherError {
    /// Single line used for log records and dialog bodies
    pub fn detail(&self) -> String {
        let (_, message) = self.error.get_message();
        let traceback = self.traceback.trim();
        if traceback.is_empty() {
            message
        } else {
            format!("{}: {}", message, traceback)
        }
    }
}
impl Display for LauncherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (title, _) = self.error.get_message();
        write!(f, "{}: {}", title, self.detail())
    }
}
impl std::error::Error for LauncherError {}

#[derive(Clone, Debug, PartialEq)]
pub enum LauncherErrorType {
    // Logo
    LogoNotFound(PathBuf),
    LogoUnrecognizedFormat(PathBuf),
    LogoDecodeError(PathBuf),

    // Processes
    ScriptLaunchError(String),

    // Config and files
    ConfigError(String),
    FileReadError(PathBuf),
    FileParseError(PathBuf),
    FlagParseError(String),
    HomeDirError,

    // Runtime
    LoggerError,
    DisplayError,
}
impl LauncherErrorType {
    pub fn get_message(&self) -> (String, String) {
        fn path(loc: &Path) -> String {
            loc.to_string_lossy().to_string()
        }
        let (title, message) = match self {
            Self::LogoNotFound(loc) => (
                "LogoNotFound",
                format!("Logo file not found at {}", path(loc)),
            ),
            Self::LogoUnrecognizedFormat(loc) => (
                "LogoUnrecognizedFormat",
                format!("Unidentified image format: {}", path(loc)),
            ),
            Self::LogoDecodeError(loc) => (
                "LogoDecodeError",
                format!("Unexpected error loading logo {}", path(loc)),
            ),
            Self::ScriptLaunchError(script) => ("Error", format!("Could not run {}", script)),
            Self::ConfigError(reason) => ("ConfigError", reason.clone()),
            Self::FileReadError(loc) => (
                "FileReadError",
                format!("Failed to read file {}", path(loc)),
            ),
            Self::FileParseError(loc) => (
                "FileParseError",
                format!("Failed to parse file {}", path(loc)),
            ),
            Self::FlagParseError(flag) => (
                "FlagParseError",
                format!("Invalid value for flag \"{}\"", flag),
            ),
            Self::HomeDirError => (
                "HomeDirError",
                String::from("Could not determine the home directory"),
            ),
            Self::LoggerError => ("LoggerError", String::from("Failed to initialize the logger")),
            Self::DisplayError => ("DisplayError", String::from("No display available")),
        };
        (title.to_string(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_errors_name_the_script() {
        let error = launcher_error!(
            LauncherErrorType::ScriptLaunchError(String::from("app.py")),
            "No such file or directory (os error 2)"
        );
        let (title, _) = error.error.get_message();
        assert_eq!(title, "Error");
        assert_eq!(
            error.detail(),
            "Could not run app.py: No such file or directory (os error 2)"
        );
    }

    #[test]
    fn empty_traceback_is_omitted() {
        let error = launcher_error!(LauncherErrorType::DisplayError, "");
        assert_eq!(error.detail(), "No display available");
        assert_eq!(error.to_string(), "DisplayError: No display available");
    }

    #[test]
    fn config_errors_carry_their_reason() {
        let error = launcher_error!(
            LauncherErrorType::ConfigError(String::from(
                "Invalid value \"0\" for \"window.width\""
            )),
            ""
        );
        assert_eq!(error.detail(), "Invalid value \"0\" for \"window.width\"");
        let missing = LauncherErrorType::FileReadError(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(missing.get_message().1, "Failed to read file /tmp/missing.toml");
    }
}
