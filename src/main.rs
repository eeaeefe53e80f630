use std::sync::Arc;

use devserve::config::Config;
use devserve::logger;
use devserve::server::{start_signal_handler, Server, SignalHandler};

fn main() {
    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_startup_error(&e);
            std::process::exit(1);
        }
    };

    // Build the Tokio runtime, thread count from config when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = match runtime_builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_startup_error(&e);
            std::process::exit(1);
        }
    };

    runtime.block_on(async_main(cfg));
}

async fn async_main(cfg: Config) {
    let port = cfg.server.port;

    // Bind before printing the banner so startup failures stay fatal
    let server = match Server::bind(cfg) {
        Ok(server) => server,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            logger::log_port_in_use(port);
            std::process::exit(1);
        }
        Err(e) => {
            logger::log_startup_error(&e);
            std::process::exit(1);
        }
    };

    match server.local_addr() {
        Ok(addr) => logger::log_server_start(&addr, server.root()),
        Err(e) => {
            logger::log_startup_error(&e);
            std::process::exit(1);
        }
    }

    let signals = Arc::new(SignalHandler::new());
    start_signal_handler(Arc::clone(&signals));

    if let Err(e) = server.run(Arc::clone(&signals.shutdown)).await {
        logger::log_startup_error(&e);
        std::process::exit(1);
    }
}
