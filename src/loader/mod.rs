pub mod css_loader;
pub mod flag_loader;
pub mod logo_loader;

pub struct Loader;
