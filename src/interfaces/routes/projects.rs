use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    // Fixed segments first so they are not captured by `{project_id}`.
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
            )
            .service(
                web::resource("/search")
                    .route(web::get().to(projects::search_projects))
            )
            .service(
                web::resource("/stats")
                    .route(web::get().to(projects::get_project_stats))
            )
            .service(
                web::resource("/timeline")
                    .route(web::get().to(projects::get_project_timeline))
            )
            .service(
                web::resource("/technologies")
                    .route(web::get().to(projects::get_technologies))
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(projects::get_categories))
            )
            .service(
                web::resource("/validate")
                    .route(web::post().to(projects::validate_project))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project_by_id))
            )
            .service(
                web::resource("/{project_id}/related")
                    .route(web::get().to(projects::get_related_projects))
            )
    );
}
