use tera::{Context, Tera};

use crate::site::domain::HomePage;

const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.html"));

pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", INDEX)?;
    Ok(tera)
}

pub fn render_home(tera: &Tera, page: &HomePage) -> Result<String, tera::Error> {
    let context = Context::from_serialize(page)?;
    tera.render("index.html", &context)
}
