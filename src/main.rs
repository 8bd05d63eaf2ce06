//! Falling Obstacles entry point
//!
//! Sets up logging and runs the native game loop.

use falling_obstacles::GameConfig;
use falling_obstacles::platform::native;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Falling Obstacles starting...");

    if let Err(e) = native::run(GameConfig::default()) {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
