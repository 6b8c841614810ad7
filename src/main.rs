use gameshow::app::{self, WindowConfig};
use gameshow::shell::Shell;

fn main() {
    gameshow::init_logging();

    let config = WindowConfig {
        title: "gameshow".to_string(),
        width: 800,
        height: 720,
    };
    if let Err(err) = app::run(config, Shell::new) {
        log::error!("run loop failed: {err:#}");
        std::process::exit(1);
    }
}
