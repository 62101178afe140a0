// --- File: crates/services/scheduler_backend/src/main.rs ---
use std::net::SocketAddr;

use scheduler_backend::routes;
use scheduler_common::logging;
use scheduler_config::load_config;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return;
        }
    };

    #[allow(unused_mut)] // mutated only when docs are enabled
    let mut app = routes();

    #[cfg(feature = "openapi")]
    {
        use scheduler_backend::doc::SchedulerApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        println!("📖 Adding Swagger UI at /docs");
        let swagger_ui = SwaggerUi::new("/docs").url("/docs/openapi.json", SchedulerApiDoc::openapi());
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid server address {}: {}", addr, e);
            return;
        }
    };

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    info!("🚀 Scheduler listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
