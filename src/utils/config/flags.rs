use std::path::PathBuf;

use crate::{
    launcher_error,
    utils::{
        config::LauncherConfig,
        errors::{LauncherError, LauncherErrorType},
        files::{expand_path, home_dir},
    },
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LauncherFlags {
    pub config: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl LauncherFlags {
    /// Builds the effective configuration. Without `--config` the built-in
    /// defaults are used. A config file that cannot be read or parsed is not
    /// fatal: the defaults are used and the problem is returned alongside.
    pub fn to_config(&mut self) -> (LauncherConfig, Vec<LauncherError>) {
        let mut warnings = Vec::new();

        let config = match self.config.take() {
            None => LauncherConfig::default(),
            Some(path) => {
                let path = match home_dir() {
                    Ok(home) => expand_path(&path, &home),
                    Err(_) => path,
                };
                match std::fs::read_to_string(&path) {
                    Ok(config_str) => LauncherConfig::from_toml(&config_str).unwrap_or_else(|e| {
                        warnings.push(launcher_error!(
                            LauncherErrorType::FileParseError(path.clone()),
                            e
                        ));
                        LauncherConfig::default()
                    }),
                    Err(e) => {
                        warnings.push(launcher_error!(LauncherErrorType::FileReadError(path), e));
                        LauncherConfig::default()
                    }
                }
            }
        };

        let config = LauncherConfig::apply_flags(self, config);
        let (config, invalid) = config.validate();
        warnings.extend(invalid);
        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn no_config_flag_uses_defaults() {
        let mut flags = LauncherFlags::default();
        let (config, warnings) = flags.to_config();
        assert!(warnings.is_empty());
        assert_eq!(config.actions.len(), 4);
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn missing_config_file_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let mut flags = LauncherFlags {
            config: Some(path.clone()),
            ..Default::default()
        };
        let (config, warnings) = flags.to_config();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].error, LauncherErrorType::FileReadError(path));
        assert_eq!(config.actions.len(), 4);
    }

    #[test]
    fn malformed_config_file_is_a_warning() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[window\nwidth = ").unwrap();
        let mut flags = LauncherFlags {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let (config, warnings) = flags.to_config();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0].error,
            LauncherErrorType::FileParseError(_)
        ));
        assert_eq!(config.window.height, 900);
    }

    #[test]
    fn flags_override_the_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[launch]\ninterpreter = \"/usr/bin/python3.11\"\n\n[debug]\nlog_level = \"warn\"\n"
        )
        .unwrap();
        let mut flags = LauncherFlags {
            config: Some(file.path().to_path_buf()),
            interpreter: Some(PathBuf::from("/opt/venv/bin/python")),
            log_level: None,
        };
        let (config, warnings) = flags.to_config();
        assert!(warnings.is_empty());
        assert_eq!(
            config.launch.interpreter,
            PathBuf::from("/opt/venv/bin/python")
        );
        assert_eq!(config.debug.log_level, "warn");
    }
}
