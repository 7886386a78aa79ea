//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{DeleteAck, ErrorBody};
use super::modules::{health, hello, members, metrics as metrics_mod, request_id};
use crate::application::members::MemberService;
use crate::infrastructure::database::repositories::MemberRepository;
use crate::shared::PageInfo;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Hello
        hello::hello,
        // Health
        health::health_check,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
    ),
    components(
        schemas(
            // Common
            ErrorBody,
            DeleteAck,
            PageInfo,
            hello::HelloReply,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Members
            members::MemberDto,
            members::MembersPage,
            members::CreateMemberRequest,
            members::UpdateMemberRequest,
        )
    ),
    tags(
        (name = "Hello", description = "Connectivity check"),
        (name = "Health", description = "Server health check endpoints"),
        (name = "Members", description = "Member CRUD with pagination, search and sorting"),
    ),
    info(
        title = "Member Management API",
        version = "1.0.0",
        description = "REST API for managing members: paginated, searchable, sortable listing plus CRUD",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, prometheus_handle: PrometheusHandle) -> Router {
    let member_state = members::MemberHandlerState {
        members: Arc::new(MemberService::new(Arc::new(MemberRepository::new(
            db.clone(),
        )))),
    };

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = metrics_mod::MetricsState {
        handle: prometheus_handle,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let member_routes = Router::new()
        .route(
            "/",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/{id}",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
        .with_state(member_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_mod::prometheus_metrics))
        .with_state(metrics_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Hello
        .route("/hello", get(hello::hello))
        // Health
        .merge(health_routes)
        // Metrics
        .merge(metrics_routes)
        // Members
        .nest("/members", member_routes)
        // Middleware
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(middleware::from_fn(metrics_mod::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
