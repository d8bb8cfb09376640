fn main() {
    if let Err(e) = magcurate_lib::run() {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
