//! HTTP API for akademi.
//!
//! Exposes one set of CRUD endpoints per content collection under the
//! configured base path (`/api` by default), the contact document, and a
//! health probe.

pub mod error;
mod handlers;
mod middleware;

use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::content::Resource;
use crate::error::Result;
use crate::storage::{ContentStore, JsonCollection};

pub use error::ApiError;

/// Endpoints for one collection: list, create, update and delete on a single path.
fn collection_routes<T: Resource>(collection: Arc<JsonCollection<T>>) -> MethodRouter {
    get(handlers::list::<T>)
        .post(handlers::create::<T>)
        .put(handlers::update::<T>)
        .delete(handlers::remove::<T>)
        .with_state(collection)
}

/// Build the application router over `store`.
#[must_use]
pub fn build_router(store: &ContentStore, server: &ServerConfig) -> Router {
    let base = server.api_base.as_str();
    let contact: MethodRouter = get(handlers::get_contact)
        .put(handlers::put_contact)
        .with_state(store.contact.clone());

    Router::new()
        .route(
            &format!("{base}/trainings"),
            collection_routes(store.trainings.clone()),
        )
        .route(
            &format!("{base}/testimonials"),
            collection_routes(store.testimonials.clone()),
        )
        .route(&format!("{base}/faqs"), collection_routes(store.faqs.clone()))
        .route(
            &format!("{base}/linkedin-contents"),
            collection_routes(store.linkedin_contents.clone()),
        )
        .route(&format!("{base}/contact"), contact)
        .route("/healthz", get(handlers::healthz))
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{addr}");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds_with_custom_base() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::open(dir.path()).unwrap();
        let server = ServerConfig {
            api_base: "/content/v1".to_string(),
            ..ServerConfig::default()
        };
        let _router = build_router(&store, &server);
    }
}
