use serde::Deserialize;
use std::path::PathBuf;

use super::{
    errors::{LauncherError, LauncherErrorType},
    files::{expand_path, home_dir},
};
use crate::{launcher::Action, launcher_error};

mod defaults;
mod flags;
mod imp;

pub use defaults::{FileDefaults, OtherDefaults, PaletteDefaults, WindowDefaults};
pub use flags::LauncherFlags;

/// Configuration sections:
///
/// - **window**: Title, heading and initial geometry.
/// - **palette**: Colours applied through the generated stylesheet.
/// - **logo**: Decorative image shown in the header.
/// - **launch**: How scripts are started.
/// - **debug**: Logging preferences.
/// - **actions**: The ordered list of buttons.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    #[serde(default)]
    pub window: ConfigWindow,

    #[serde(default)]
    pub palette: ConfigPalette,

    #[serde(default)]
    pub logo: ConfigLogo,

    #[serde(default)]
    pub launch: ConfigLaunch,

    #[serde(default)]
    pub debug: ConfigDebug,

    #[serde(default = "OtherDefaults::actions")]
    pub actions: Vec<Action>,
}
impl LauncherConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::de::from_str(content)
    }

    pub fn apply_flags(flags: &mut LauncherFlags, mut config: LauncherConfig) -> LauncherConfig {
        if let Some(interpreter) = flags.interpreter.take() {
            config.launch.interpreter = interpreter;
        }
        if let Some(level) = flags.log_level.take() {
            config.debug.log_level = level;
        }
        if let Some(dir) = config.debug.log_dir.take() {
            config.debug.log_dir = Some(match home_dir() {
                Ok(home) => expand_path(&dir, &home),
                Err(_) => dir,
            });
        }
        config
    }

    /// Replaces invalid values with their defaults. Every replacement is
    /// returned as a non-breaking error.
    pub fn validate(mut self) -> (Self, Vec<LauncherError>) {
        let mut warnings = Vec::new();
        let mut invalid = |key: &str, value: &dyn std::fmt::Display| {
            warnings.push(launcher_error!(
                LauncherErrorType::ConfigError(format!(
                    "Invalid value \"{}\" for \"{}\", using the default instead.",
                    value, key
                )),
                ""
            ));
        };

        let palette = &mut self.palette;
        for (key, value, default) in [
            ("palette.primary_blue", &mut palette.primary_blue, PaletteDefaults::primary_blue()),
            ("palette.white", &mut palette.white, PaletteDefaults::white()),
            ("palette.navy_blue", &mut palette.navy_blue, PaletteDefaults::navy_blue()),
            ("palette.background", &mut palette.background, PaletteDefaults::background()),
            ("palette.hover", &mut palette.hover, PaletteDefaults::hover()),
        ] {
            if !is_hex_color(value) {
                invalid(key, &*value);
                *value = default;
            }
        }

        if self.window.width <= 0 {
            invalid("window.width", &self.window.width);
            self.window.width = WindowDefaults::width();
        }
        if self.window.height <= 0 {
            invalid("window.height", &self.window.height);
            self.window.height = WindowDefaults::height();
        }
        if self.logo.width <= 0 {
            invalid("logo.width", &self.logo.width);
            self.logo.width = OtherDefaults::logo_size();
        }
        if self.logo.height <= 0 {
            invalid("logo.height", &self.logo.height);
            self.logo.height = OtherDefaults::logo_size();
        }
        if self.launch.interpreter.as_os_str().is_empty() {
            invalid("launch.interpreter", &"");
            self.launch.interpreter = FileDefaults::interpreter();
        }

        let before = self.actions.len();
        self.actions
            .retain(|a| !a.label.trim().is_empty() && !a.script.as_os_str().is_empty());
        if self.actions.len() != before {
            invalid("actions", &format!("{} incomplete entries", before - self.actions.len()));
        }
        if self.actions.is_empty() {
            invalid("actions", &"[]");
            self.actions = OtherDefaults::actions();
        }

        (self, warnings)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigWindow {
    #[serde(default = "WindowDefaults::title")]
    pub title: String,
    #[serde(default = "WindowDefaults::heading")]
    pub heading: String,
    #[serde(default = "WindowDefaults::width")]
    pub width: i32,
    #[serde(default = "WindowDefaults::height")]
    pub height: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigPalette {
    #[serde(default = "PaletteDefaults::primary_blue")]
    pub primary_blue: String,
    #[serde(default = "PaletteDefaults::white")]
    pub white: String,
    #[serde(default = "PaletteDefaults::navy_blue")]
    pub navy_blue: String,
    #[serde(default = "PaletteDefaults::background")]
    pub background: String,
    #[serde(default = "PaletteDefaults::hover")]
    pub hover: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigLogo {
    #[serde(default = "OtherDefaults::bool_true")]
    pub enable: bool,
    /// Relative paths are resolved against the launcher's own directory
    #[serde(default = "FileDefaults::logo")]
    pub path: PathBuf,
    #[serde(default = "OtherDefaults::logo_size")]
    pub width: i32,
    #[serde(default = "OtherDefaults::logo_size")]
    pub height: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigLaunch {
    #[serde(default = "FileDefaults::interpreter")]
    pub interpreter: PathBuf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigDebug {
    #[serde(default = "OtherDefaults::log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Accepts `#RGB` and `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_launcher() {
        let config = LauncherConfig::default();
        assert_eq!(config.window.title, "Face Recognition Attendance System");
        assert_eq!((config.window.width, config.window.height), (800, 900));
        assert_eq!(config.palette.navy_blue, "#000080");
        assert_eq!(config.palette.background, "#F0F0F0");
        assert_eq!(config.logo.path, PathBuf::from("isi.png"));
        assert_eq!((config.logo.width, config.logo.height), (200, 200));

        let scripts: Vec<_> = config
            .actions
            .iter()
            .map(|a| a.script.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            scripts,
            [
                "get_faces_from_camera_tkinter.py",
                "features_extraction_to_csv.py",
                "attendance_taker.py",
                "app.py"
            ]
        );
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = LauncherConfig::from_toml(
            r##"
            [palette]
            hover = "#3355FF"

            [[actions]]
            label = "Register"
            script = "register.py"
            "##,
        )
        .unwrap();
        assert_eq!(config.palette.hover, "#3355FF");
        assert_eq!(config.palette.white, "#FFFFFF");
        assert_eq!(config.actions.len(), 1);
        assert_eq!(config.actions[0].help, "");
        assert_eq!(config.window.height, 900);
    }

    #[test]
    fn example_config_spells_out_the_defaults() {
        let config =
            LauncherConfig::from_toml(include_str!("../../../config.example.toml")).unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let mut config = LauncherConfig::default();
        config.palette.background = String::from("beige");
        config.window.width = 0;
        config.actions = vec![Action::new("", "nothing.py", "")];

        let (config, warnings) = config.validate();
        assert_eq!(config.palette.background, "#F0F0F0");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.actions, OtherDefaults::actions());
        // background, width, incomplete action, empty list
        assert_eq!(warnings.len(), 4);
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#0000FF"));
        assert!(is_hex_color("#fff"));
        assert!(!is_hex_color("0000FF"));
        assert!(!is_hex_color("#00GG00"));
        assert!(!is_hex_color("#0000"));
    }
}
