use std::net::SocketAddr;
use std::sync::Arc;

use modula_api::{app, AppState};
use modula_offer::OfferEngine;
use modula_store::NotificationRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modula_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = modula_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Modula API on port {}", config.server.port);

    let offers = OfferEngine::new(config.site.timezone_string.as_deref());

    let app_state = AppState {
        notifications: Arc::new(NotificationRepo::new()),
        offers: Arc::new(offers),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
