use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};

use confsite::config::Config;
use confsite::{db, handlers, notify};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Ensure the data directory exists for the default sqlite path
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    let pool = db::init_pool(&config.database_url).await;
    db::run_migrations(&pool).await;

    // Promote the compiled-in committee lists into editable rows on first run
    db::seed_committees(&pool).await;

    let notifier = notify::new_notifier();

    log::info!("Starting server at http://{}", config.addr);

    let addr = config.addr.clone();
    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &config.cors_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(notifier.clone()))
            // Malformed JSON bodies answer in the same shape as every
            // other error instead of actix's plain-text default.
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "message": message })),
                )
                .into()
            }))
            .configure(handlers::configure)
            .service(actix_files::Files::new("/static", config.static_dir.clone()))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound()
                    .json(serde_json::json!({ "message": "Not found" }))
            }))
    })
    .bind(&addr)?
    .run()
    .await
}
