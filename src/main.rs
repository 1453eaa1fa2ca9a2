use frontend::{logging, AppConfig};

pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.max_level());

    if let Err(e) = frontend::mount(config) {
        tracing::error!("failed to start: {e}");
    }
}
