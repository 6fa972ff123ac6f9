use actix_web::web;

use crate::{errors::AppError, handlers::json_error::not_found};

/// Extractor failures answer in the same JSON shape as handler errors,
/// and unmatched paths get a JSON 404.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::from(err).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::from(err).into()),
    )
    .default_service(web::to(not_found));
}
