use crate::error::AppError;
use crate::models::ProcessResponseQuery;
use crate::storage::entities::session_filter;
use crate::storage::{Record, RecordManager, Store};
use actix_web::{web, HttpResponse, Result};
use intake_types::{MessageResponse, ProcessResponse, ProcessResponseCreate, ProcessResponseUpdate};
use tracing::{info, warn};

/// GET /process-responses/{id}
pub async fn get_process_response(
    response_id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = response_id.into_inner();
    info!(response_id = id, "Retrieving process response");

    let conn = store.acquire()?;
    let response = RecordManager::<ProcessResponse>::new(&conn)
        .get_one(id)?
        .ok_or_else(|| {
            warn!(response_id = id, "Process response not found");
            ProcessResponse::not_found()
        })?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /process-responses/?session_id=&skip=&limit=
///
/// An unknown session yields an empty list, not a 404.
pub async fn list_process_responses(
    query: web::Query<ProcessResponseQuery>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    info!(
        session_id = query.session_id.as_deref().unwrap_or(""),
        skip = query.skip,
        limit = query.limit,
        "Listing process responses"
    );

    let filter = session_filter(query.session_id.as_deref());

    let conn = store.acquire()?;
    let responses = RecordManager::<ProcessResponse>::new(&conn).get_many(
        filter.as_ref(),
        query.skip,
        query.limit,
    )?;

    Ok(HttpResponse::Ok().json(responses))
}

/// POST /process-responses/
pub async fn create_process_response(
    request: web::Json<ProcessResponseCreate>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let conn = store.acquire()?;
    let response = RecordManager::<ProcessResponse>::new(&conn).create(request.into_inner())?;

    info!(
        response_id = response.id,
        session_id = %response.session_id,
        "Recorded process response"
    );
    Ok(HttpResponse::Ok().json(response))
}

/// PUT /process-responses/{id}
pub async fn update_process_response(
    response_id: web::Path<i64>,
    request: web::Json<ProcessResponseUpdate>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = response_id.into_inner();
    info!(response_id = id, "Updating process response");

    let conn = store.acquire()?;
    let response = RecordManager::<ProcessResponse>::new(&conn)
        .update(id, request.into_inner())
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound(_)) {
                warn!(response_id = id, "Process response not found");
            }
        })?;

    Ok(HttpResponse::Ok().json(response))
}

/// DELETE /process-responses/{id}
pub async fn delete_process_response(
    response_id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = response_id.into_inner();
    info!(response_id = id, "Deleting process response");

    let conn = store.acquire()?;
    RecordManager::<ProcessResponse>::new(&conn)
        .delete(id)
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound(_)) {
                warn!(response_id = id, "Process response not found");
            }
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(ProcessResponse::deleted_message())))
}
