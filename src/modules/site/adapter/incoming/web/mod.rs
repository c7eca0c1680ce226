pub mod home;
pub mod templates;

pub use home::home_handler;
pub use templates::{build_templates, render_home};
