use std::{env, path::PathBuf, str::FromStr};

use super::Loader;
use crate::launcher_error;
use crate::utils::{
    config::LauncherFlags,
    errors::{LauncherError, LauncherErrorType},
};

impl Loader {
    pub fn load_flags() -> Result<LauncherFlags, LauncherError> {
        let args: Vec<String> = env::args().collect();
        if args.iter().any(|arg| arg == "--help" || arg == "-h") {
            flag_documentation();
            std::process::exit(0);
        }
        if args.iter().any(|arg| arg == "--version") {
            print_version();
            std::process::exit(0);
        }

        LauncherFlags::new(&args)
    }
}
impl LauncherFlags {
    fn extract_flag_value<T: FromStr>(
        args: &[String],
        flag: &str,
        short: Option<&str>,
    ) -> Result<Option<T>, LauncherError> {
        let Some(position) = args
            .iter()
            .position(|arg| arg == flag || Some(arg.as_str()) == short)
        else {
            return Ok(None);
        };
        args.get(position + 1)
            .filter(|val| !val.starts_with("--"))
            .and_then(|val| val.parse::<T>().ok())
            .map(Some)
            .ok_or_else(|| {
                launcher_error!(
                    LauncherErrorType::FlagParseError(flag.to_string()),
                    "missing or malformed value"
                )
            })
    }
    fn new(args: &[String]) -> Result<Self, LauncherError> {
        Ok(LauncherFlags {
            config: Self::extract_flag_value::<PathBuf>(args, "--config", Some("-c"))?,
            interpreter: Self::extract_flag_value::<PathBuf>(args, "--interpreter", None)?,
            log_level: Self::extract_flag_value::<String>(args, "--log-level", None)?,
        })
    }
}

pub fn print_version() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Attendance Launcher v{}", version);
}
pub fn flag_documentation() {
    let allowed_flags: Vec<(&str, &str)> = vec![
        ("\nBASICS:", ""),
        ("--version", "Print the version of the application."),
        ("--help", "Show this help message with allowed flags."),
        ("\nFILES:", ""),
        ("--config", "Specify the configuration file (.toml) to load."),
        ("\nBEHAVIOR:", ""),
        (
            "--interpreter",
            "Interpreter used to run the scripts. Defaults to python3.",
        ),
        (
            "--log-level",
            "Log filter, e.g. \"debug\" or \"attendance_launcher=trace\".",
        ),
    ];

    println!("{:<15} {}", "Flag", "Description");
    for (flag, explanation) in allowed_flags {
        println!("{:<15} {}", flag, explanation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_gives_empty_flags() {
        let flags = LauncherFlags::new(&args(&["attendance-launcher"])).unwrap();
        assert_eq!(flags, LauncherFlags::default());
    }

    #[test]
    fn long_and_short_flags_are_read() {
        let flags = LauncherFlags::new(&args(&[
            "attendance-launcher",
            "-c",
            "/etc/launcher.toml",
            "--interpreter",
            "/opt/venv/bin/python",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(flags.config, Some(PathBuf::from("/etc/launcher.toml")));
        assert_eq!(
            flags.interpreter,
            Some(PathBuf::from("/opt/venv/bin/python"))
        );
        assert_eq!(flags.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn flag_without_value_is_rejected() {
        let error =
            LauncherFlags::new(&args(&["attendance-launcher", "--config", "--log-level", "info"]))
                .unwrap_err();
        assert_eq!(
            error.error,
            LauncherErrorType::FlagParseError(String::from("--config"))
        );
        assert!(LauncherFlags::new(&args(&["attendance-launcher", "--interpreter"])).is_err());
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let flags =
            LauncherFlags::new(&args(&["attendance-launcher", "--fullscreen", "extra"])).unwrap();
        assert_eq!(flags, LauncherFlags::default());
    }
}
