fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG=debug shows wraps and activations
    env_logger::init();

    log::info!("Starting infinite canvas");
    infinite_canvas::run_app()
}
