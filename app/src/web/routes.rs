// app/src/web/routes.rs

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::web::handlers::{auth_handlers, order_handlers, product_handlers, user_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Malformed bodies get the same `{"detail": ...}` shape as every other error.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  let detail = err.to_string();
  tracing::warn!(%detail, "Rejected JSON payload.");
  error::InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))).into()
}

fn form_error_handler(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
  let detail = err.to_string();
  tracing::warn!(%detail, "Rejected form payload.");
  error::InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))).into()
}

/// Registers every route. Called from `main.rs` and from the HTTP tests.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::FormConfig::default().error_handler(form_error_handler))
    .route("/health", web::get().to(health_check_handler))
    .route("/token", web::post().to(auth_handlers::token_handler))
    .service(
      web::scope("/v1")
        .route("/user", web::post().to(user_handlers::create_user_handler))
        .route("/user/orders", web::get().to(user_handlers::list_user_orders_handler))
        .service(
          web::resource("/product")
            .route(web::get().to(product_handlers::list_products_handler))
            .route(web::post().to(product_handlers::create_product_handler)),
        )
        .route("/product/{name}", web::get().to(product_handlers::get_product_handler))
        .route("/orders", web::post().to(order_handlers::place_order_handler)),
    );
}
