use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers;
use crate::state::AppState;

/// Full application router with global middleware applied
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health))
        .merge(user_routes())
        .merge(item_routes())
        .merge(offer_routes())
        .merge(product_routes())
        .merge(form_routes())
        .merge(unicorn_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/user", get(users::read_user).post(users::create_user))
        .route("/user/", get(users::read_user).post(users::create_user))
}

fn item_routes() -> Router<AppState> {
    use handlers::items;

    Router::new()
        .route("/items/:item_id", get(items::read_item).put(items::update_item))
        .route("/items_data/:item_id", put(items::update_item))
}

fn offer_routes() -> Router<AppState> {
    use handlers::offers;

    Router::new()
        .route("/offers", post(offers::create_offer))
        .route("/offers/", post(offers::create_offer))
}

fn product_routes() -> Router<AppState> {
    Router::new().route("/productos/:item_id", get(handlers::products::read_product))
}

fn form_routes() -> Router<AppState> {
    use handlers::{files, login};

    Router::new()
        .route("/login", post(login::login))
        .route("/login/", post(login::login))
        .route("/files", post(files::create_file))
        .route("/files/", post(files::create_file))
        .route("/uploadfile", post(files::create_upload_file))
        .route("/uploadfile/", post(files::create_upload_file))
}

fn unicorn_routes() -> Router<AppState> {
    Router::new().route("/unicorns/:name", get(handlers::unicorns::read_unicorn))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
