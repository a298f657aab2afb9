/// HTTP server implementation
use crate::api::handlers::{
    check_orientation, health_check, submit_quiz, validate_placement, AppState,
};
use crate::config::{AppConfig, ServerConfig};
use crate::content::ContentStore;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            enable_cors: server.enable_cors,
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// API server for the simulator, quiz and orientation game
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: ApiConfig, app_config: AppConfig, content: ContentStore) -> Self {
        Self {
            config,
            state: AppState::new(content, app_config),
        }
    }

    /// Build a server from application configuration, loading content from
    /// the configured path or the bundled bank.
    pub fn from_app_config(app_config: AppConfig) -> Result<Self> {
        let content = ContentStore::load(app_config.content.path.as_deref())
            .context("Failed to load learning content")?;
        let config = ApiConfig::from(&app_config.server);
        Ok(Self::new(config, app_config, content))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            .route("/health", get(health_check))
            .route("/validate_placement", post(validate_placement))
            .route("/submit_quiz", post(submit_quiz))
            .route("/check_orientation", post(check_orientation))
            .with_state(self.state.clone());

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Run the server and stop accepting connections once `shutdown_signal` resolves
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let app = self.build_router();
        let bind_addr = self.config.bind_address();

        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", bind_addr))?;
        let local_addr = listener
            .local_addr()
            .context("Failed to read listener address")?;

        tracing::info!(
            "Starting HTTP server on {} ({} quiz questions, {} orientation sections)",
            local_addr,
            self.state.content.questions().len(),
            self.state.content.sections().len()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
