use std::io;
use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};
use chrono::Local;

use organizer::config::{Config, StoreBackend};
use organizer::db;
use organizer::handlers;
use organizer::store::{DashboardStore, MemoryStore, PgStore};

async fn open_store(config: &Config) -> io::Result<Arc<dyn DashboardStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| io::Error::other("DATABASE_URL must be set"))?;
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .map_err(io::Error::other)?;
            db::run_migrations(&pool).await.map_err(io::Error::other)?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory store with demo data (changes lost on restart)");
            Ok(Arc::new(MemoryStore::demo(Local::now().date_naive())))
        }
    }
}

// Session encryption key: SESSION_KEY keeps sessions valid across restarts.
fn session_key(config: &Config) -> Key {
    match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+), generating random key",
                val.len()
            );
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let store = web::Data::from(open_store(&config).await?);
    let secret_key = session_key(&config);
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(config.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
