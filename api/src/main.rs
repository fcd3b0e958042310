use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use mh_api::app::{configure, AppState};
use mh_api::middleware::cors::create_cors;
use mh_infra::cache::RedisSessionStore;
use mh_shared::config::{CacheConfig, CookieConfig, JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting MeetHub authentication service");

    // Load configuration
    let server = ServerConfig::from_env();
    let jwt = JwtConfig::from_env();
    let cookie = CookieConfig::from_env();
    let cache = CacheConfig::from_env();

    if jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; using the development default");
    }

    // Connect the shared session store
    let store = RedisSessionStore::connect(cache)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let state = web::Data::new(AppState::new(Arc::new(store), jwt, cookie));

    let bind_address = server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(state.clone())
            .configure(configure::<RedisSessionStore>)
    })
    .bind(&bind_address)?
    .run()
    .await
}
