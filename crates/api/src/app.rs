use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use domain::services::TalkGateway;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{alimtalk, clients, groups, health, templates, users};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub gateway: Arc<dyn TalkGateway>,
}

pub fn create_app(config: Config, pool: PgPool, gateway: Arc<dyn TalkGateway>) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        gateway,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Versioned API routes
    let api_routes = Router::new()
        // User/company routes (v1)
        .route("/api/v1/users", post(users::register_user))
        .route("/api/v1/users/check-email", post(users::check_email))
        .route(
            "/api/v1/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Client routes (v1)
        .route(
            "/api/v1/clients",
            post(clients::create_client).get(clients::list_clients),
        )
        .route("/api/v1/clients/bulk", post(clients::create_clients_bulk))
        .route(
            "/api/v1/clients/by-group",
            get(clients::list_clients_by_group),
        )
        .route(
            "/api/v1/clients/:client_id",
            put(clients::update_client).delete(clients::delete_client),
        )
        // Template routes (v1)
        .route("/api/v1/templates", get(templates::list_templates))
        .route("/api/v1/templates/:code", get(templates::get_template_by_code))
        // Group routes (v1)
        .route(
            "/api/v1/groups",
            post(groups::create_group).get(groups::list_groups),
        )
        .route("/api/v1/groups/:group_id", delete(groups::delete_group))
        // Dispatch pipeline routes (v1)
        .route("/api/v1/alimtalk/contents", post(alimtalk::save_contents))
        .route("/api/v1/alimtalk/send", post(alimtalk::send_alimtalk))
        .route("/api/v1/alimtalk/results", post(alimtalk::save_results))
        .route(
            "/api/v1/alimtalk/results/detail",
            post(alimtalk::save_result_details),
        );

    // Public routes (health and metrics)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
