use axum::routing::{delete, get, post, put};
use axum::{middleware as axum_middleware, Router};
use serde_json::json;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod validation;

use middleware::{require_admin, require_user};

/// Build the full application router around one connection pool.
pub fn app(pool: PgPool) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .merge(user_routes())
        .merge(product_routes())
        .merge(order_routes())
        .merge(cart_routes());

    let router = if config::config().security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http()).with_state(pool)
}

fn user_routes() -> Router<PgPool> {
    use handlers::users;

    let public = Router::new()
        .route("/api/users/register", post(users::register))
        .route("/api/users/login", post(users::login));

    let authed = Router::new()
        .route("/api/users/profile", put(users::update_profile))
        .route("/api/users/password", put(users::change_password))
        .route("/api/users/account", delete(users::delete_account))
        .route_layer(axum_middleware::from_fn(require_user));

    let admin = Router::new()
        .route("/api/users", get(users::list))
        .route("/api/users/:id", get(users::get_one))
        .route("/api/users/:id/activate", put(users::activate))
        .route("/api/users/:id/deactivate", put(users::deactivate))
        .route_layer(axum_middleware::from_fn(require_admin));

    public.merge(authed).merge(admin)
}

fn product_routes() -> Router<PgPool> {
    use handlers::products;

    let public = Router::new()
        .route("/api/products", get(products::list))
        .route("/api/products/search", get(products::search))
        .route("/api/products/categories", get(products::categories))
        .route("/api/products/:id", get(products::get_one))
        .route("/api/products/:id/similar", get(products::similar))
        .route(
            "/api/products/category/:category/related",
            get(products::related),
        );

    let admin = Router::new()
        .route("/api/products", post(products::create))
        .route(
            "/api/products/:id",
            put(products::update).delete(products::delete),
        )
        .route_layer(axum_middleware::from_fn(require_admin));

    public.merge(admin)
}

fn order_routes() -> Router<PgPool> {
    use handlers::orders;

    Router::new()
        .route("/api/orders", post(orders::create))
        .route(
            "/api/orders/:id",
            get(orders::get_one)
                .put(orders::update)
                .delete(orders::delete),
        )
        .route("/api/orders/user/:user_id", get(orders::list_by_user))
        .route("/api/orders/:id/cancel", put(orders::cancel))
        .route("/api/orders/:id/deliver", put(orders::deliver))
        .route(
            "/api/orders/:id/status",
            get(orders::get_status).put(orders::set_status),
        )
        .route(
            "/api/orders/:id/payment-status",
            get(orders::get_payment_status).put(orders::set_payment_status),
        )
        .route(
            "/api/orders/:id/shipping-status",
            put(orders::set_shipping_status),
        )
        .route("/api/orders/:id/total", get(orders::get_total))
        .route("/api/orders/:id/invoice", get(orders::invoice))
        .route_layer(axum_middleware::from_fn(require_user))
}

fn cart_routes() -> Router<PgPool> {
    use handlers::cart;

    Router::new()
        .route("/api/cart/add", post(cart::add))
        .route("/api/cart/update", put(cart::update))
        .route("/api/cart/remove", delete(cart::remove))
        .route_layer(axum_middleware::from_fn(require_user))
}

async fn health(
    axum::extract::State(pool): axum::extract::State<PgPool>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::manager::Database::health_check(&pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
