use actix_web::web;

use crate::handlers::portfolio;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(portfolio::get_profile))
    )
    .service(
        web::resource("/experiences")
            .route(web::get().to(portfolio::get_experiences))
    );
}
