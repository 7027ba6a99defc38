use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use collective_home::auth::provider::UserProviderFactory;
use collective_home::config::AppConfig;
use collective_home::graphql::{GraphqlClient, HomeDataSource};
use collective_home::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let secret_key = config.session_key();
    let client = GraphqlClient::new(config.api_url.clone());
    log::info!("Using GraphQL API at {}", client.endpoint());

    let source: web::Data<dyn HomeDataSource> =
        web::Data::from(Arc::new(client.clone()) as Arc<dyn HomeDataSource>);
    let users: web::Data<dyn UserProviderFactory> =
        web::Data::from(Arc::new(client) as Arc<dyn UserProviderFactory>);

    log::info!("Starting server at http://{}", config.bind_addr);

    let config_data = web::Data::new(config.clone());
    let static_dir = config.static_dir.clone();
    let cookie_secure = config.cookie_secure;
    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(config_data.clone())
            .app_data(source.clone())
            .app_data(users.clone())
            .service(actix_files::Files::new("/static", &static_dir))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
