use crate::utils::config::{
    defaults::{FileDefaults, OtherDefaults, PaletteDefaults, WindowDefaults},
    ConfigDebug, ConfigLaunch, ConfigLogo, ConfigPalette, ConfigWindow, LauncherConfig,
};

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            window: ConfigWindow::default(),
            palette: ConfigPalette::default(),
            logo: ConfigLogo::default(),
            launch: ConfigLaunch::default(),
            debug: ConfigDebug::default(),
            actions: OtherDefaults::actions(),
        }
    }
}

impl Default for ConfigWindow {
    fn default() -> Self {
        Self {
            title: WindowDefaults::title(),
            heading: WindowDefaults::heading(),
            width: WindowDefaults::width(),
            height: WindowDefaults::height(),
        }
    }
}

impl Default for ConfigPalette {
    fn default() -> Self {
        Self {
            primary_blue: PaletteDefaults::primary_blue(),
            white: PaletteDefaults::white(),
            navy_blue: PaletteDefaults::navy_blue(),
            background: PaletteDefaults::background(),
            hover: PaletteDefaults::hover(),
        }
    }
}

impl Default for ConfigLogo {
    fn default() -> Self {
        Self {
            enable: true,
            path: FileDefaults::logo(),
            width: OtherDefaults::logo_size(),
            height: OtherDefaults::logo_size(),
        }
    }
}

impl Default for ConfigLaunch {
    fn default() -> Self {
        Self {
            interpreter: FileDefaults::interpreter(),
        }
    }
}

impl Default for ConfigDebug {
    fn default() -> Self {
        Self {
            log_level: OtherDefaults::log_level(),
            log_dir: None,
        }
    }
}
