use actix_web::{web, App, HttpServer};
use hangman_backend::config::db::RuntimeEnv;
use hangman_backend::config::server::ServerConfig;
use hangman_backend::infra::state::build_state;
use hangman_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use hangman_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let words = match config.load_words() {
        Ok(words) => words,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load vocabulary");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(config.db_kind)
        .with_words(words)
        .with_stats_refresh(config.stats_refresh)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %config.host,
        port = config.port,
        db = ?config.db_kind,
        vocabulary = app_state.words.len(),
        "Starting Hangman server"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
