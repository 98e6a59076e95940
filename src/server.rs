use axum::{
    Extension, Router,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use reqwest::Client;
use std::sync::Arc;

use crate::{Res, api, config::Config, info, management::SessionManager, warning};

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionManager,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: SessionManager::new(),
            http: Client::new(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/me/stats", get(api::stats))
        .fallback(get(api::static_file))
        .layer(Extension(state))
        .layer(middleware::from_fn(cors))
}

/// Allows any origin, answering preflight requests directly.
async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let requested_headers = request
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned();

        let mut response = StatusCode::NO_CONTENT.into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        if let Some(value) = requested_headers {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        return response;
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Binds the configured address and serves until Ctrl-C.
///
/// With `open_browser` set the login page is opened in the default browser
/// once the listener is bound.
pub async fn start_api_server(config: Config, open_browser: bool) -> Res<()> {
    let listener = tokio::net::TcpListener::bind(config.server_address.as_str())
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.server_address, e))?;
    let addr = listener.local_addr()?;

    info!("Serving files from {}", config.public_dir.display());
    info!("Server listening on http://{}", addr);

    if open_browser {
        let login_url = format!("http://localhost:{}/login", addr.port());
        if webbrowser::open(&login_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                login_url
            )
        }
    }

    let state = Arc::new(AppState::new(config));
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warning!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
