#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_then_fetch_therapist() {
        let app = make_test_app();

        let (status, created) = app
            .post(
                "/api/therapists",
                json!({ "name": "Dr. Lee", "specialization": "Speech Therapy", "email": "lee@clinic.test" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap();
        assert!(created["createdAt"].is_string());

        let (status, fetched) = app.get(&format!("/api/therapists/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (_, list) = app.get("/api/therapists").await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_specialization_is_rejected() {
        let app = make_test_app();

        let (status, json) = app
            .post("/api/therapists", json!({ "name": "Dr. Lee", "email": "lee@clinic.test" }))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Name, specialization, and email are required");
        assert!(app.state.read().await.therapists().is_empty());
    }

    #[tokio::test]
    async fn unknown_therapist_is_404() {
        let app = make_test_app();

        let (status, json) = app.get("/api/therapists/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Therapist not found");
    }
}
