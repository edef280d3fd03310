//! Route table shared by the server binary and the integration tests.

use crate::config::ApiConfig;
use crate::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::handlers::{client_info, health, process_responses, qualification_questions};
use actix_cors::Cors;
use actix_web::web;

/// Registers every endpoint plus the extractor configs that turn malformed
/// bodies, queries and ids into validation errors.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/version", web::get().to(health::version_info)),
        )
        .service(
            web::resource(["/qualification-questions", "/qualification-questions/"])
                .route(web::get().to(qualification_questions::list_questions))
                .route(web::post().to(qualification_questions::create_question)),
        )
        .service(
            web::resource("/qualification-questions/{id}")
                .route(web::get().to(qualification_questions::get_question))
                .route(web::put().to(qualification_questions::update_question))
                .route(web::delete().to(qualification_questions::delete_question)),
        )
        .service(
            web::resource(["/client-info", "/client-info/"])
                .route(web::get().to(client_info::list_client_infos))
                .route(web::post().to(client_info::create_client_info)),
        )
        .service(
            web::resource("/client-info/{id}")
                .route(web::get().to(client_info::get_client_info))
                .route(web::put().to(client_info::update_client_info))
                .route(web::delete().to(client_info::delete_client_info)),
        )
        .service(
            web::resource(["/process-responses", "/process-responses/"])
                .route(web::get().to(process_responses::list_process_responses))
                .route(web::post().to(process_responses::create_process_response)),
        )
        .service(
            web::resource("/process-responses/{id}")
                .route(web::get().to(process_responses::get_process_response))
                .route(web::put().to(process_responses::update_process_response))
                .route(web::delete().to(process_responses::delete_process_response)),
        );
}

pub fn cors(config: &ApiConfig) -> Cors {
    config
        .allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600)
}
