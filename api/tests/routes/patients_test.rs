#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn patient_with_unknown_therapist_session_is_rejected() {
        let app = make_test_app();

        let (status, patient) = app
            .post("/api/patients", json!({ "name": "A", "email": "a@x.com" }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(patient["id"].is_string());
        assert!(patient["createdAt"].is_string());
        assert!(patient.get("phone").is_none());
        assert!(patient.get("dateOfBirth").is_none());

        let (status, json) = app
            .post(
                "/api/sessions",
                json!({
                    "therapistId": "does-not-exist",
                    "patientId": patient["id"],
                    "dateTime": "2026-10-16T09:00",
                    "duration": 60,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Invalid therapist ID" }));
        assert!(app.state.read().await.sessions().is_empty());
    }

    #[tokio::test]
    async fn optional_fields_round_trip() {
        let app = make_test_app();

        let (status, created) = app
            .post(
                "/api/patients",
                json!({
                    "name": "Ana Ruiz",
                    "email": "ana@example.com",
                    "phone": "(555) 123-4567",
                    "dateOfBirth": "2016-04-02",
                    "guardian": "Maria Ruiz",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, fetched) = app
            .get(&format!("/api/patients/{}", created["id"].as_str().unwrap()))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["guardian"], "Maria Ruiz");
        assert_eq!(fetched["dateOfBirth"], "2016-04-02");
        assert!(fetched.get("notes").is_none());
    }

    #[tokio::test]
    async fn missing_email_is_rejected() {
        let app = make_test_app();

        let (status, json) = app.post("/api/patients", json!({ "name": "A", "email": "" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Name and email are required");
    }

    #[tokio::test]
    async fn deleting_a_patient_cascades() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let other = app.create_patient("Ben").await;

        let first = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;
        app.create_session(&therapist, &patient, "2026-10-17T09:00").await;
        let kept = app.create_session(&therapist, &other, "2026-10-16T10:00").await;
        let (status, _) = app
            .post("/api/attendance", json!({ "sessionId": first, "attended": true }))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, summary) = app.delete(&format!("/api/patients/{patient}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary, json!({ "sessionsRemoved": 2, "attendanceRemoved": 1 }));

        let (status, _) = app.get(&format!("/api/patients/{patient}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, sessions) = app.get("/api/sessions").await;
        let sessions = sessions.as_array().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0]["id"], kept.as_str());

        let (_, attendance) = app.get("/api/attendance").await;
        assert!(attendance.as_array().unwrap().is_empty());

        let (status, json) = app.delete(&format!("/api/patients/{patient}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Patient not found");
    }
}
