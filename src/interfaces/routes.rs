use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod portfolio;
mod projects;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .service(health_check)
            .configure(portfolio::config_routes)
            .configure(projects::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
