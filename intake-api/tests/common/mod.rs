#![allow(dead_code)]

use actix_web::{test, web, App};
use intake_api::routes::configure_routes;
use intake_api::Store;
use serde_json::{json, Value};

pub struct TestApp<S> {
    pub store: Store,
    pub app: S,
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let store = Store::open_in_memory()?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp { store, app })
}

pub fn acme_client() -> Value {
    json!({
        "company_name": "Acme",
        "website_url": "acme.com",
        "industry": "tech",
        "contact_first_name": "A",
        "contact_last_name": "B",
        "contact_email": "a@b.com",
        "number_employees": 10,
        "number_clients": 5,
        "sells_product": true,
        "sells_service": false,
        "description": "desc"
    })
}

pub fn qualification_question(text: &str, phase_id: i64) -> Value {
    json!({
        "question_text": text,
        "phase_id": phase_id
    })
}

pub fn process_response(session_id: &str, question: &str, answer: &str) -> Value {
    json!({
        "session_id": session_id,
        "question": question,
        "answer": answer
    })
}
