pub mod home_page_loader;

pub use home_page_loader::load_home_page;
