use crate::error::AppError;
use crate::models::ListQuery;
use crate::storage::{Record, RecordManager, Store};
use actix_web::{web, HttpResponse, Result};
use intake_types::{
    MessageResponse, QualificationQuestion, QualificationQuestionCreate,
    QualificationQuestionUpdate,
};
use tracing::{info, warn};

/// GET /qualification-questions/{id}
pub async fn get_question(
    question_id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = question_id.into_inner();
    info!(question_id = id, "Retrieving qualification question");

    let conn = store.acquire()?;
    let manager = RecordManager::<QualificationQuestion>::new(&conn);

    let question = manager.get_one(id)?.ok_or_else(|| {
        warn!(question_id = id, "Qualification question not found");
        QualificationQuestion::not_found()
    })?;

    Ok(HttpResponse::Ok().json(question))
}

/// GET /qualification-questions/
pub async fn list_questions(
    query: web::Query<ListQuery>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    info!(skip = query.skip, limit = query.limit, "Listing qualification questions");

    let conn = store.acquire()?;
    let manager = RecordManager::<QualificationQuestion>::new(&conn);
    let questions = manager.get_many(None, query.skip, query.limit)?;

    Ok(HttpResponse::Ok().json(questions))
}

/// POST /qualification-questions/
pub async fn create_question(
    request: web::Json<QualificationQuestionCreate>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let conn = store.acquire()?;
    let manager = RecordManager::<QualificationQuestion>::new(&conn);
    let question = manager.create(request.into_inner())?;

    info!(
        question_id = question.id,
        phase_id = question.phase_id,
        "Created qualification question"
    );
    Ok(HttpResponse::Ok().json(question))
}

/// PUT /qualification-questions/{id}
pub async fn update_question(
    question_id: web::Path<i64>,
    request: web::Json<QualificationQuestionUpdate>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = question_id.into_inner();
    info!(question_id = id, "Updating qualification question");

    let conn = store.acquire()?;
    let manager = RecordManager::<QualificationQuestion>::new(&conn);
    let question = manager.update(id, request.into_inner()).inspect_err(|e| {
        if matches!(e, AppError::NotFound(_)) {
            warn!(question_id = id, "Qualification question not found");
        }
    })?;

    Ok(HttpResponse::Ok().json(question))
}

/// DELETE /qualification-questions/{id}
pub async fn delete_question(
    question_id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = question_id.into_inner();
    info!(question_id = id, "Deleting qualification question");

    let conn = store.acquire()?;
    let manager = RecordManager::<QualificationQuestion>::new(&conn);
    manager.delete(id).inspect_err(|e| {
        if matches!(e, AppError::NotFound(_)) {
            warn!(question_id = id, "Qualification question not found");
        }
    })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        QualificationQuestion::deleted_message(),
    )))
}
