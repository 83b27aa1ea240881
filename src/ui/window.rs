use gio::ActionEntry;
use gtk4::{
    gdk, prelude::*, Align, Application, ApplicationWindow, Box as GtkBox, Button,
    EventControllerMotion, Justification, Label, Orientation, Picture,
};
use std::rc::Rc;

use super::dialog::DialogReporter;
use super::hover::{HoverState, PointerEvent};
use crate::actions::script_launch::ProcessSpawner;
use crate::launcher::{Action, ActionId, ActionRegistry, Launcher};
use crate::loader::logo_loader::LogoAsset;
use crate::loader::Loader;
use crate::utils::config::LauncherConfig;
use crate::utils::files::launcher_dir;

pub fn window(application: &Application, config: Rc<LauncherConfig>) -> ApplicationWindow {
    let window = ApplicationWindow::builder()
        .application(application)
        .title(config.window.title.as_str())
        .default_width(config.window.width)
        .default_height(config.window.height)
        .build();
    window.add_css_class("attendance-launcher");

    if let Err(e) = Loader::load_css(&config.palette) {
        log::warn!("{}", e);
    }

    let launcher = Rc::new(Launcher::new(
        ActionRegistry::new(config.actions.clone()),
        Box::new(ProcessSpawner::new(config.launch.interpreter.clone())),
        Box::new(DialogReporter::new(&window)),
    ));

    let main_container = GtkBox::new(Orientation::Vertical, 0);
    main_container.set_margin_top(20);
    main_container.set_margin_bottom(20);
    main_container.set_margin_start(20);
    main_container.set_margin_end(20);

    // Header with the logo on the right
    let header = GtkBox::new(Orientation::Horizontal, 0);
    header.set_margin_bottom(20);
    let logo = LogoAsset::from_config(&config.logo, &launcher_dir());
    header.append(&logo_picture(logo.as_ref(), &config));
    main_container.append(&header);

    let heading = Label::new(Some(config.window.heading.as_str()));
    heading.add_css_class("heading");
    heading.set_justify(Justification::Center);
    heading.set_margin_top(20);
    heading.set_margin_bottom(20);
    main_container.append(&heading);

    let button_frame = GtkBox::new(Orientation::Vertical, 0);
    button_frame.set_vexpand(true);
    button_frame.set_valign(Align::Center);
    for (id, action) in launcher.actions().iter() {
        button_frame.append(&action_button(id, action, &launcher));
    }
    main_container.append(&button_frame);

    window.set_child(Some(&main_container));

    let action_close = ActionEntry::builder("close")
        .activate(|window: &ApplicationWindow, _, _| window.close())
        .build();
    window.add_action_entries([action_close]);
    application.set_accels_for_action("win.close", &["<Ctrl>W"]);

    window
}

/// Picture sized to the logo dimensions. Stays empty if the logo is disabled
/// or cannot be decoded.
fn logo_picture(logo: Option<&LogoAsset>, config: &LauncherConfig) -> Picture {
    let picture = Picture::new();
    picture.set_size_request(config.logo.width, config.logo.height);
    picture.set_can_shrink(false);
    picture.set_halign(Align::End);
    picture.set_hexpand(true);
    picture.set_margin_start(10);
    picture.set_margin_end(10);

    if let Some(logo) = logo {
        match Loader::load_logo(logo) {
            Ok(pixbuf) => {
                let texture = gdk::Texture::for_pixbuf(&pixbuf);
                picture.set_paintable(Some(&texture));
            }
            Err(e) => log::warn!("{}", e),
        }
    }
    picture
}

fn action_button(id: ActionId, action: &Action, launcher: &Rc<Launcher>) -> Button {
    let hover = Rc::new(HoverState::new());

    let button = Button::with_label(&action.label);
    button.set_widget_name(&id.control_name());
    button.set_css_classes(&hover.css_classes());
    button.set_margin_top(10);
    button.set_margin_bottom(10);
    button.set_margin_start(40);
    button.set_margin_end(40);
    if !action.help.is_empty() {
        button.set_tooltip_text(Some(action.help.as_str()));
    }

    button.connect_clicked({
        let launcher = Rc::clone(launcher);
        move |button| launcher.on_control(button.widget_name().as_str())
    });

    let motion = EventControllerMotion::new();
    motion.connect_enter({
        let hover = Rc::clone(&hover);
        let button = button.downgrade();
        move |_, _, _| {
            if let Some(button) = button.upgrade() {
                button.set_css_classes(&hover.on_pointer(PointerEvent::Enter));
            }
        }
    });
    motion.connect_leave({
        let hover = Rc::clone(&hover);
        let button = button.downgrade();
        move |_| {
            if let Some(button) = button.upgrade() {
                button.set_css_classes(&hover.on_pointer(PointerEvent::Leave));
            }
        }
    });
    button.add_controller(motion);

    button
}
