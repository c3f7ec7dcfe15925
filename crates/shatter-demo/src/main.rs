mod app;
mod effect;

use anyhow::Result;

use shatter_engine::device::GpuInit;
use shatter_engine::logging::{init_logging, LoggingConfig};
use shatter_engine::window::{Runtime, RuntimeConfig};

use crate::app::DemoApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("shatter demo starting (Esc or close button to quit)");

    let config = RuntimeConfig {
        title: "shatter · broken LCD".to_string(),
        initial_size: winit::dpi::LogicalSize::new(1280.0, 720.0),
    };

    Runtime::run(config, GpuInit::default(), DemoApp::new())
}
