//! HTTP request handlers.

mod accounts;
mod anchor;
mod dashboard;

use actix_web::web;

/// Register all routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::link)
        .service(accounts::verify)
        .service(accounts::list)
        .service(accounts::unlink)
        .service(anchor::anchor)
        .service(dashboard::status);
}
