use clap::Parser;

mod app;
mod args;
mod clock;
mod gui;
mod input;
mod lifecycle;
mod logging;
mod shaders;
mod triangle;
mod tutorial;

use app::{App, WindowConfig};
use args::Args;
use logging::LoggingConfig;
use tutorial::Tutorial;

fn main() {
    let args = <Args as Parser>::parse();

    logging::init_logging(LoggingConfig {
        env_filter: args.log.clone(),
    });

    let app = App::new(WindowConfig::default(), Tutorial::new(args.buffers));

    if let Err(e) = app.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
