mod common;

use common::ScriptedPrompt;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zop::api::ApiClient;
use zop::services::{add_application, list_applications, select_application};
use zop::ZopError;

#[tokio::test]
async fn test_add_application_with_environments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .and(body_json(json!({
            "name": "shop",
            "environments": [
                {"name": "dev", "level": 1},
                {"name": "prod", "level": 2}
            ]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let prompt = ScriptedPrompt::default()
        .with_confirms(&[true, true, false])
        .with_inputs(&["dev", "prod"]);

    add_application(&api, &prompt, "shop").await.unwrap();
}

#[tokio::test]
async fn test_add_application_without_environments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let prompt = ScriptedPrompt::default().with_confirms(&[false]);

    add_application(&api, &prompt, "blog").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({"name": "blog", "environments": []}));
}

#[tokio::test]
async fn test_add_application_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "application already exists"})))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let prompt = ScriptedPrompt::default().with_confirms(&[false]);

    let err = add_application(&api, &prompt, "shop").await.unwrap_err();
    match err {
        ZopError::Api(e) => {
            assert_eq!(e.status, 409);
            assert_eq!(e.message, "application already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_application_unreadable_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let prompt = ScriptedPrompt::default().with_confirms(&[false]);

    let err = add_application(&api, &prompt, "shop").await.unwrap_err();
    assert_eq!(err.to_string(), "error in /applications zop-api, invalid response");
}

#[tokio::test]
async fn test_list_and_select_applications() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 4, "name": "shop", "environments": [{"name": "dev", "level": 1}]},
                {"id": 5, "name": "blog"}
            ]
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();

    let apps = list_applications(&api).await.unwrap();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].environments[0].name, "dev");
    assert!(apps[1].environments.is_empty());

    let prompt = ScriptedPrompt::picks(&[Some(1)]);
    let app = select_application(&api, &prompt, "Pick one").await.unwrap();
    assert_eq!(app.id, 5);
    assert_eq!(prompt.titles(), vec!["Pick one".to_string()]);
}

#[tokio::test]
async fn test_list_applications_bad_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let err = list_applications(&api).await.unwrap_err();
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn test_select_application_from_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let prompt = ScriptedPrompt::default();

    let err = select_application(&api, &prompt, "Pick one").await.unwrap_err();
    assert_eq!(err.to_string(), "no application selected");
    assert!(prompt.titles().is_empty());
}
