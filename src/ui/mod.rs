pub mod dialog;
pub mod hover;
pub mod window;
