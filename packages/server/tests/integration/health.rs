use crate::common::{TestApp, routes};

#[tokio::test]
async fn health_reports_ok_with_database() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(routes::HEALTH).await;
    assert_eq!(res.status, 200, "health failed: {}", res.text);
    assert_eq!(res.body["status"], "ok");
    assert!(res.body["version"].is_string());
}

#[tokio::test]
async fn openapi_document_lists_media_routes() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token("/api-docs/openapi.json").await;
    assert_eq!(res.status, 200);
    let paths = res.body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/v1/users/{user_id}/lists/{kind}"));
}
