//! Main application configuration and router setup

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{context::ScenariosContext, handlers};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// API path prefix
    pub api_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_tracing: true,
            api_prefix: "/api".to_string(),
        }
    }
}

/// Create the complete REST application
pub fn create_rest_app(context: ScenariosContext, config: AppConfig) -> Router {
    let mut app = Router::new()
        // Health endpoint (no prefix)
        .route("/health", get(handlers::health_check))
        // Scenario routes with prefix
        .nest(&config.api_prefix, create_scenario_router())
        .with_state(context);

    // Add middleware layers (applied in reverse order)
    if config.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

/// Scenario trigger routes
fn create_scenario_router() -> Router<ScenariosContext> {
    Router::new()
        .route("/diagscenario/deadlock", get(handlers::trigger_deadlock))
        .route(
            "/diagscenario/memspike/{seconds}",
            get(handlers::trigger_memspike),
        )
        .route("/diagscenario/memleak/{kb}", get(handlers::trigger_memleak))
        .route("/diagscenario/exception", get(handlers::trigger_exception))
        .route(
            "/diagscenario/highcpu/{milliseconds}",
            get(handlers::trigger_highcpu),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use diaglab_engine::{
        EngineTuning, LockPair, ScenarioInvoker, ScenarioLimits, TransactionCache,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_context() -> ScenariosContext {
        ScenariosContext::new(Arc::new(ScenarioInvoker::new(
            Arc::new(TransactionCache::new()),
            Arc::new(LockPair::new()),
            EngineTuning::default(),
            ScenarioLimits::default(),
        )))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_rest_app(test_context(), AppConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_rest_app(test_context(), AppConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/diagscenario/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_custom_api_prefix() {
        let config = AppConfig {
            api_prefix: "/scenarios".to_string(),
            ..AppConfig::default()
        };
        let app = create_rest_app(test_context(), config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/scenarios/diagscenario/memleak/0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
