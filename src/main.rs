use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use estate_rank::config::{LoggingSettings, Settings};
use estate_rank::core::ListingScorer;
use estate_rank::error::handle_json_payload_error;
use estate_rank::models::ScoringWeights;
use estate_rank::routes::{self, ads::AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting SmartEstate listing scoring service...");

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let scorer = ListingScorer::new(weights, settings.scoring.max_score)
        .with_parallel_threshold(settings.scoring.parallel_threshold);

    info!(
        "Scorer initialized with weights: {:?}, max score: {}",
        weights, settings.scoring.max_score
    );

    let app_state = AppState { scorer };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port));

    match server {
        Ok(server) => server.run().await,
        Err(e) => {
            error!("Failed to bind HTTP server: {}", e);
            Err(e)
        }
    }
}
