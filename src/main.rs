// src/main.rs
mod config;
mod dtos;
mod error;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use reqwest::Client;

use crate::error::json_error_handler;
use crate::handlers::generate_handlers::generate_post;
use crate::handlers::health_handlers::health_check;
use crate::handlers::post_handlers::{create_post, delete_post, list_posts};
use crate::handlers::user_handlers::create_user;
use crate::repositories::mem_storage::MemStorage;
use crate::services::gemini_service::GeminiClient;

fn mask_key(k: &str) -> String {
    if k.len() <= 8 { "[REDACTED]".to_string() }
    else { format!("{}***{}", &k[..4], &k[k.len()-4..]) }
}

#[derive(Clone)]
pub struct AppState {
    pub storage: MemStorage,
    pub gemini: GeminiClient,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let config = match config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    info!("Gemini API key: {}", mask_key(&config.gemini_api_key));

    let http_client = Client::builder()
        .user_agent("postspark-be/0.1")
        .build()
        .expect("failed to build http client");

    let mut gemini = GeminiClient::new(http_client, config.gemini_api_key);
    if let Some(url) = &config.gemini_api_url {
        info!("Gemini API URL override: {}", url);
        gemini = gemini.with_base_url(url);
    }

    let state = web::Data::new(AppState {
        storage: MemStorage::new(),
        gemini,
    });

    let bind_address = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["content-type", "x-firebase-uid"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(health_check) // GET /health
            .service(
                web::scope("/api")
                    .service(create_user)   // POST /api/users
                    .service(generate_post) // POST /api/generate-post
                    .service(list_posts)    // GET /api/posts
                    .service(create_post)   // POST /api/posts
                    .service(delete_post),  // DELETE /api/posts/{id}
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
