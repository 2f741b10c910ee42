use crate::config::ExtractionConfig;
use crate::handlers;
use crate::services::LocalStorage;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ExtractionConfig,
    pub storage: Arc<LocalStorage>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ExtractionConfig) -> Result<Self, AppError> {
        let storage = Arc::new(LocalStorage::new(&config.upload.dir).await.map_err(|e| {
            tracing::error!(
                "Failed to initialize upload storage at {}: {}",
                config.upload.dir,
                e
            );
            e
        })?);

        let state = AppState {
            config: config.clone(),
            storage,
        };

        let app = Router::new()
            .route("/", get(handlers::service_index))
            .route("/health", get(handlers::health_check))
            .route("/upload/invoice", post(handlers::upload_invoice))
            .route("/upload/po", post(handlers::upload_po))
            .layer(DefaultBodyLimit::max(config.upload.max_bytes))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Extraction API listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
