use gio::glib::WeakRef;
use gtk4::{prelude::*, AlertDialog, ApplicationWindow};

use crate::utils::errors::LauncherError;

/// Surfaces errors the user needs to see
pub trait ErrorReporter {
    fn report(&self, error: &LauncherError);
}

/// Shows errors as a modal dialog on top of the launcher window
pub struct DialogReporter {
    parent: WeakRef<ApplicationWindow>,
}
impl DialogReporter {
    pub fn new(parent: &ApplicationWindow) -> Self {
        Self {
            parent: parent.downgrade(),
        }
    }
}
impl ErrorReporter for DialogReporter {
    fn report(&self, error: &LauncherError) {
        let (title, _) = error.error.get_message();
        let dialog = AlertDialog::builder()
            .modal(true)
            .message(title)
            .detail(error.detail())
            .build();
        dialog.show(self.parent.upgrade().as_ref());
    }
}
