use astra::Server;
use price_predictor::config::AppConfig;
use price_predictor::domain::SystemClock;
use price_predictor::responses::error_to_response;
use price_predictor::{handle, logging, App};
use tracing::{error, info, warn};

fn main() {
    logging::init();

    // 1️⃣ Read configuration
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the model (and encoder, if configured) once
    let app = match App::load(&cfg, Box::new(SystemClock)) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ Artifact loading failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!("Starting server at http://{}", cfg.bind_addr);

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, sharing the loaded artifacts read-only
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(error = %err, "request failed");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
