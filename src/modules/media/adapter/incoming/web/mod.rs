pub mod serve_image;

pub use serve_image::serve_image_handler;
