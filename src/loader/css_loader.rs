use gtk4::gdk::Display;
use gtk4::CssProvider;

use super::Loader;
use crate::launcher_error;
use crate::utils::config::ConfigPalette;
use crate::utils::errors::{LauncherError, LauncherErrorType};

impl Loader {
    pub fn load_css(palette: &ConfigPalette) -> Result<CssProvider, LauncherError> {
        let display = Display::default().ok_or_else(|| {
            launcher_error!(LauncherErrorType::DisplayError, "No display available")
        })?;

        let provider = CssProvider::new();
        provider.load_from_string(&stylesheet(palette));
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        log::debug!("Added palette style provider");
        Ok(provider)
    }
}

/// Stylesheet for the launcher window. Buttons carry either `normal` or
/// `hover` next to `action`.
pub fn stylesheet(palette: &ConfigPalette) -> String {
    format!(
        "
window.attendance-launcher {{
    background-color: {background};
}}
label.heading {{
    color: {primary};
    font-family: Helvetica, sans-serif;
    font-size: 24pt;
    font-weight: bold;
}}
button.action {{
    background-image: none;
    color: {white};
    font-family: Helvetica, sans-serif;
    font-size: 12pt;
    font-weight: bold;
    border: 3px outset {navy};
    border-radius: 0;
    min-height: 48px;
}}
button.action.normal {{
    background-color: {navy};
}}
button.action.hover,
button.action:active {{
    background-color: {hover};
    color: {white};
}}
",
        background = palette.background,
        primary = palette.primary_blue,
        white = palette.white,
        navy = palette.navy_blue,
        hover = palette.hover,
    )
}
