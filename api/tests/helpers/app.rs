use api::app;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use db::Store;
use serde_json::{Value, json};
use tower::ServiceExt;
use util::state::AppState;

/// A fresh router over an empty store, plus a handle on that store.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub fn make_test_app() -> TestApp {
    let state = AppState::new(Store::new());
    TestApp {
        router: app(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn create_therapist(&self, name: &str) -> String {
        let (status, json) = self
            .post(
                "/api/therapists",
                json!({
                    "name": name,
                    "specialization": "Speech Therapy",
                    "email": format!("{}@clinic.test", name.to_lowercase().replace(' ', ".")),
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        json["id"].as_str().unwrap().to_string()
    }

    pub async fn create_patient(&self, name: &str) -> String {
        let (status, json) = self
            .post(
                "/api/patients",
                json!({
                    "name": name,
                    "email": format!("{}@clinic.test", name.to_lowercase().replace(' ', ".")),
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        json["id"].as_str().unwrap().to_string()
    }

    pub async fn create_session(&self, therapist_id: &str, patient_id: &str, date_time: &str) -> String {
        let (status, json) = self
            .post(
                "/api/sessions",
                json!({
                    "therapistId": therapist_id,
                    "patientId": patient_id,
                    "dateTime": date_time,
                    "duration": 45,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        json["id"].as_str().unwrap().to_string()
    }
}
