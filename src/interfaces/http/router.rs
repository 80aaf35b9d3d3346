//! API Router with Swagger UI

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::ViewCounterService;
use crate::config::{AppConfig, CorsConfig};
use crate::domain::RepositoryProvider;

use super::common::{sanitize_server_errors, ApiError, ClientIpHeader, ErrorBody};
use super::modules::request_id::request_id_middleware;
use super::modules::{articles, comments, health, metrics, taxonomy, views};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        views::handlers::record_view,
        views::handlers::get_view_count,
        articles::handlers::list_articles,
        articles::handlers::get_article,
        taxonomy::handlers::list_topics,
        taxonomy::handlers::create_topic,
        taxonomy::handlers::list_tags,
        comments::handlers::list_comments,
        comments::handlers::create_comment,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            health::ComponentHealth,
            health::HealthStatus,
            views::CountResponse,
            articles::ArticleListResponse,
            articles::ArticleSummaryDto,
            articles::PaginationDto,
            articles::ArticleDetailDto,
            articles::TagDto,
            taxonomy::TopicResponse,
            taxonomy::TagResponse,
            taxonomy::CreateTopicRequest,
            taxonomy::CreateTopicResponse,
            comments::CommentResponse,
            comments::CreateCommentRequest,
            comments::CreateCommentResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Views", description = "Rate-limited article view counter"),
        (name = "Articles", description = "Published articles and their translations"),
        (name = "Taxonomy", description = "Topics and tags"),
        (name = "Comments", description = "Reader comments"),
    ),
    info(
        title = "Blog Service API",
        version = "1.0.0",
        description = "Public API of the blog: articles, comments and view counts"
    )
)]
pub struct ApiDoc;

/// Everything the handlers need at runtime.
pub struct ApiContext {
    pub db: DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
    pub views: Arc<ViewCounterService>,
    /// `None` leaves `/metrics` unrouted
    pub prometheus: Option<PrometheusHandle>,
    pub started_at: Instant,
}

fn cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let origin = match cfg.allowed_origin.trim() {
        "*" | "" => AllowOrigin::any(),
        origin => match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                warn!(origin, "Invalid cors.allowed_origin, allowing any origin");
                AllowOrigin::any()
            }
        },
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(cfg.max_age_secs))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// Create the API router with all routes
pub fn create_api_router(ctx: ApiContext, config: &AppConfig) -> Router {
    let client_ip = ClientIpHeader::parse(&config.views.client_ip_header).unwrap_or_else(|_| {
        warn!(
            header = %config.views.client_ip_header,
            "Invalid views.client_ip_header, using CF-Connecting-IP"
        );
        ClientIpHeader::default()
    });

    // `/` is kept for older front-end snippets that call the worker root
    let view_routes = Router::new()
        .route(
            "/increment",
            get(views::get_view_count).post(views::record_view),
        )
        .route("/", get(views::get_view_count).post(views::record_view))
        .with_state(views::ViewsState {
            service: ctx.views,
            client_ip,
        });

    let article_routes = Router::new()
        .route("/", get(articles::list_articles))
        .route("/{slug}", get(articles::get_article))
        .with_state(articles::ArticlesState {
            repos: ctx.repos.clone(),
        });

    let taxonomy_state = taxonomy::TaxonomyState {
        repos: ctx.repos.clone(),
    };
    let taxonomy_routes = Router::new()
        .route(
            "/api/topics",
            get(taxonomy::list_topics).post(taxonomy::create_topic),
        )
        .route("/api/tags", get(taxonomy::list_tags))
        .with_state(taxonomy_state);

    let comment_routes = Router::new()
        .route(
            "/",
            get(comments::list_comments).post(comments::create_comment),
        )
        .with_state(comments::CommentsState { repos: ctx.repos });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: ctx.db,
            environment: config.environment,
            started_at: ctx.started_at,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(view_routes)
        .merge(taxonomy_routes)
        .nest("/api/articles", article_routes)
        .nest("/api/comments", comment_routes);

    if let Some(handle) = ctx.prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(
            config.environment,
            sanitize_server_errors,
        ))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}
