#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = portfolio_backend::start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
