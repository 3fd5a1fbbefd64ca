extern crate dotenv;

pub mod app;
pub mod database;
pub mod stats;

mod auth;
mod routes;

use std::sync::Arc;

use actix_web::{App, HttpServer};
use dotenv::dotenv;

use app::AppState;
use auth::token::TokenKeys;
use database::memory::MemStore;
use routes::{blog::*, comment::*, login::*, user::*};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let secret = std::env::var("SECRET").unwrap_or_else(|_| {
        log::warn!("SECRET not set, signing tokens with a development key");
        String::from("development-secret")
    });
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:8080"));

    // The store handle is owned here and injected into every request
    let store = Arc::new(MemStore::new());
    let app_state = AppState::new(store, TokenKeys::from_secret(&secret));

    log::info!("Server running on {}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(app_state.clone()))
            //User routes
            .service(list_users)
            .service(get_user)
            .service(create_user)
            .service(update_user)
            .service(delete_user)
            //Login route
            .service(login)
            //Blog routes
            .service(list_blogs)
            .service(get_blog)
            .service(create_blog)
            .service(update_blog)
            .service(delete_blog)
            //Comment routes
            .service(create_comment)
    })
    .bind(bind_addr)?
    .run()
    .await
}
