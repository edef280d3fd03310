use crate::error::AppError;
use crate::models::ListQuery;
use crate::storage::{Record, RecordManager, Store};
use actix_web::{web, HttpResponse, Result};
use intake_types::{ClientInfo, ClientInfoCreate, ClientInfoUpdate, MessageResponse};
use tracing::{info, warn};

/// GET /client-info/{id}
pub async fn get_client_info(
    client_id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = client_id.into_inner();
    info!(client_id = id, "Retrieving client info");

    let conn = store.acquire()?;
    let client = RecordManager::<ClientInfo>::new(&conn)
        .get_one(id)?
        .ok_or_else(|| {
            warn!(client_id = id, "Client info not found");
            ClientInfo::not_found()
        })?;

    Ok(HttpResponse::Ok().json(client))
}

/// GET /client-info/
pub async fn list_client_infos(
    query: web::Query<ListQuery>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    info!(skip = query.skip, limit = query.limit, "Listing client info");

    let conn = store.acquire()?;
    let clients = RecordManager::<ClientInfo>::new(&conn).get_many(None, query.skip, query.limit)?;

    Ok(HttpResponse::Ok().json(clients))
}

/// POST /client-info/
pub async fn create_client_info(
    request: web::Json<ClientInfoCreate>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let conn = store.acquire()?;
    let client = RecordManager::<ClientInfo>::new(&conn).create(request.into_inner())?;

    info!(
        client_id = client.id,
        company = %client.company_name,
        "Created client info"
    );
    Ok(HttpResponse::Ok().json(client))
}

/// PUT /client-info/{id}
pub async fn update_client_info(
    client_id: web::Path<i64>,
    request: web::Json<ClientInfoUpdate>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = client_id.into_inner();
    info!(client_id = id, "Updating client info");

    let conn = store.acquire()?;
    let client = RecordManager::<ClientInfo>::new(&conn)
        .update(id, request.into_inner())
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound(_)) {
                warn!(client_id = id, "Client info not found");
            }
        })?;

    Ok(HttpResponse::Ok().json(client))
}

/// DELETE /client-info/{id}
pub async fn delete_client_info(
    client_id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = client_id.into_inner();
    info!(client_id = id, "Deleting client info");

    let conn = store.acquire()?;
    RecordManager::<ClientInfo>::new(&conn)
        .delete(id)
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound(_)) {
                warn!(client_id = id, "Client info not found");
            }
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(ClientInfo::deleted_message())))
}
