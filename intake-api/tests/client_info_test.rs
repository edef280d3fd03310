mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use common::{acme_client, setup_test_app};
use serde_json::{json, Value};

#[actix_rt::test]
async fn test_client_info_lifecycle() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/client-info/")
        .set_json(acme_client())
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("id should be assigned");
    assert_eq!(id, 1);
    for (field, value) in acme_client().as_object().unwrap() {
        assert_eq!(&created[field], value, "field {field} should be echoed");
    }

    let req = TestRequest::put()
        .uri(&format!("/client-info/{id}"))
        .set_json(json!({"number_employees": 20}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["number_employees"], 20);
    let mut expected = created.clone();
    expected["number_employees"] = json!(20);
    assert_eq!(updated, expected);

    let req = TestRequest::delete()
        .uri(&format!("/client-info/{id}"))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Client info deleted successfully");

    let req = TestRequest::get()
        .uri(&format!("/client-info/{id}"))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Client info not found");

    Ok(())
}

#[actix_rt::test]
async fn test_get_returns_created_record() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/client-info")
        .set_json(acme_client())
        .to_request();
    let created: Value = test::call_and_read_body_json(&test_app.app, req).await;

    let req = TestRequest::get()
        .uri(&format!("/client-info/{}", created["id"]))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&test_app.app, req).await;

    assert_eq!(fetched, created);
    Ok(())
}

#[actix_rt::test]
async fn test_create_coerces_numeric_strings() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let mut body = acme_client();
    body["number_employees"] = json!("10");
    body["number_clients"] = json!(5.0);
    body["sells_service"] = json!("false");

    let req = TestRequest::post()
        .uri("/client-info/")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["number_employees"], 10);
    assert_eq!(created["number_clients"], 5);
    assert_eq!(created["sells_service"], false);

    let req = TestRequest::put()
        .uri(&format!("/client-info/{}", created["id"]))
        .set_json(json!({"number_clients": "7", "sells_product": "0"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(updated["number_clients"], 7);
    assert_eq!(updated["sells_product"], false);

    let mut body = acme_client();
    body["number_employees"] = json!("ten");
    let req = TestRequest::post()
        .uri("/client-info/")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[actix_rt::test]
async fn test_create_with_missing_field_is_rejected() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let mut body = acme_client();
    body.as_object_mut().unwrap().remove("contact_email");

    let req = TestRequest::post()
        .uri("/client-info/")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");

    let req = TestRequest::get().uri("/client-info/").to_request();
    let list: Value = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(list.as_array().unwrap().len(), 0, "nothing should be stored");

    Ok(())
}

#[actix_rt::test]
async fn test_update_with_wrong_type_leaves_record_untouched() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/client-info/")
        .set_json(acme_client())
        .to_request();
    let created: Value = test::call_and_read_body_json(&test_app.app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = TestRequest::put()
        .uri(&format!("/client-info/{id}"))
        .set_json(json!({"company_name": "Globex", "number_clients": "many"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = TestRequest::get()
        .uri(&format!("/client-info/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(fetched["company_name"], "Acme");

    Ok(())
}

#[actix_rt::test]
async fn test_update_and_delete_missing_record() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::put()
        .uri("/client-info/99")
        .set_json(json!({"industry": "retail"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::delete().uri("/client-info/99").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::get().uri("/client-info/").to_request();
    let list: Value = test::call_and_read_body_json(&test_app.app, req).await;
    assert!(list.as_array().unwrap().is_empty());

    Ok(())
}
