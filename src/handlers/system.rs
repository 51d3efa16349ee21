//! Health, version and metrics routes.

use paperclip::actix::web;

use super::{get_metrics, health, version};

pub fn system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/version").route(web::get().to(version)))
        .service(web::resource("/metrics").route(web::get().to(get_metrics)));
}
