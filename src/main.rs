use gio::prelude::*;
use gtk4::prelude::GtkWindowExt;
use gtk4::{glib, Application};
use std::env;
use std::process;
use std::rc::Rc;

mod actions;
mod launcher;
mod loader;
mod ui;
mod utils;

use loader::Loader;

const APPLICATION_ID: &str = "org.attendance.Launcher";

fn main() -> glib::ExitCode {
    let mut flags = Loader::load_flags().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });
    let (config, warnings) = flags.to_config();

    let _logger = utils::logging::init_logger(&config.debug)
        .map_err(|e| eprintln!("{}", e))
        .ok();
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::info!(
        "Starting with {} actions, interpreter {}",
        config.actions.len(),
        config.launch.interpreter.display()
    );

    let application = Application::builder()
        .application_id(APPLICATION_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let config = Rc::new(config);
    application.connect_activate(move |app| {
        let window = ui::window::window(app, Rc::clone(&config));
        window.present();
    });

    // Flags were consumed above, GTK only gets the program name
    let argv0: Vec<String> = env::args().take(1).collect();
    application.run_with_args(&argv0)
}
