// app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{
  assistant_handlers, auth_handlers, booking_handlers, community_handlers, item_handlers, loan_handlers,
  order_handlers, stats_handlers,
};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      // Authentication and the current session
      .service(
        web::scope("/auth")
          .route("/signup", web::post().to(auth_handlers::signup_handler))
          .route("/signin", web::post().to(auth_handlers::signin_handler))
          .route("/signout", web::post().to(auth_handlers::signout_handler))
          .route("/session", web::get().to(auth_handlers::session_handler)),
      )
      // Lending library
      .service(
        web::scope("/items")
          .route("", web::get().to(item_handlers::list_items_handler))
          .route("", web::post().to(item_handlers::create_item_handler))
          .route("/{item_id}", web::get().to(item_handlers::get_item_handler))
          .route("/{item_id}", web::delete().to(item_handlers::delete_item_handler)),
      )
      // Per-member views
      .service(
        web::scope("/users/{user_id}")
          .route("/items", web::get().to(item_handlers::user_items_handler))
          .route("/orders", web::get().to(order_handlers::user_orders_handler))
          .route("/impact", web::get().to(stats_handlers::user_impact_handler)),
      )
      .route("/bookings", web::post().to(booking_handlers::create_booking_handler))
      // Tracking
      .service(
        web::scope("/orders")
          .route("", web::get().to(order_handlers::list_orders_handler))
          .route("/{order_id}", web::get().to(order_handlers::get_order_handler))
          .route("/{order_id}/status", web::put().to(order_handlers::update_status_handler))
          .route("/{order_id}/carrier", web::put().to(order_handlers::assign_carrier_handler)),
      )
      .route("/deliveries", web::get().to(order_handlers::available_deliveries_handler))
      .service(
        web::scope("/loans")
          .route("", web::get().to(loan_handlers::list_loans_handler))
          .route("/{loan_id}/clear", web::post().to(loan_handlers::clear_loan_handler)),
      )
      // Community feed
      .service(
        web::scope("/posts")
          .route("", web::get().to(community_handlers::list_posts_handler))
          .route("", web::post().to(community_handlers::create_post_handler))
          .route("/{post_id}/like", web::post().to(community_handlers::like_post_handler)),
      )
      .route("/badges", web::get().to(community_handlers::list_badges_handler))
      .route("/stats", web::get().to(stats_handlers::global_stats_handler))
      .route("/assistant", web::post().to(assistant_handlers::assistant_handler)),
  );
}
