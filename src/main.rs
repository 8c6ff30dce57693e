use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use launchkit::config::Config;
use launchkit::generation::{HttpCompletionClient, Orchestrator};
use launchkit::server;
use launchkit::status::InMemoryStatusStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }
    env_logger::init();

    let config = Config::from_env().expect("Invalid configuration");
    let client = HttpCompletionClient::new(config.completion.clone())
        .expect("Failed to create completion client");
    log::info!(
        "Using model {} at {}",
        client.settings().model,
        client.settings().api_url
    );

    let orchestrator = web::Data::new(
        Orchestrator::new(Arc::new(client), Arc::new(InMemoryStatusStore::new()))
            .with_stream_timeout(config.completion.timeout),
    );

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(orchestrator.clone())
            .configure(server::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
