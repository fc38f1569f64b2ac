use binary_fixture_server::config::Config;
use binary_fixture_server::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg.logging)?;

    // Tokio runtime, sized by the optional `server.workers` setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    match cfg.server.workers {
        Some(0) => logger::log_warning("server.workers = 0 ignored, using default worker threads"),
        Some(workers) => {
            runtime_builder.worker_threads(workers);
            logger::log_info(&format!("Using {workers} worker threads"));
        }
        None => {}
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(server::run(&cfg))
}
