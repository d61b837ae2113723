use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
mod api;
use crate::api::{
    health::health_config,
    job::{build_schema, handlers::graphql_config, schema::schema_sdl},
};
mod cli;
mod config;
mod db;
mod logging;
mod shutdown;
use crate::cli::{Cli, Command};
use crate::db::{job_repository::MongoJobRepository, Database};
use crate::shutdown::ShutdownCoordinator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let (host_override, port_override) = match cli.command {
        Some(Command::PrintSchema) => {
            println!("{}", schema_sdl());
            return Ok(());
        }
        Some(Command::Serve { host, port }) => (host, port),
        None => (None, None),
    };

    // Load configuration from environment
    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let host = host_override.unwrap_or(config.host);
    let port = port_override.unwrap_or(config.port);

    logging::init(&config.log_dir)?;

    info!("Starting job-board application");
    info!("Configuration loaded successfully:");
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Log directory: {}", config.log_dir);

    // The process cannot do anything useful without the database
    let client = match db::connection::get_connection(&config.database_url).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let database = Database::new(Arc::new(MongoJobRepository::new(&client)));
    let schema = build_schema(database.clone());
    let max_payload_size = config.max_payload_size;

    let server = HttpServer::new(move || {
        // Configure payload size limits globally
        let payload_config = web::PayloadConfig::default().limit(max_payload_size);
        let json_config = web::JsonConfig::default().limit(max_payload_size);

        App::new()
            .app_data(web::Data::new(schema.clone())) // Shared GraphQL schema
            .app_data(web::Data::new(database.clone())) // Storage accessor for health checks
            .app_data(payload_config)
            .app_data(json_config)
            .configure(health_config)
            .configure(graphql_config)
    })
    .disable_signals();

    info!("Server starting on http://{}:{}", host, port);

    let server = server.bind((host.as_str(), port))?.run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn server in background
    let server_task = actix_web::rt::spawn(server);

    // Create shutdown coordinator and wait for shutdown signal
    let coordinator = ShutdownCoordinator::new(server_handle, server_task, client);

    coordinator.wait_for_shutdown().await
}
