#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn record_is_enriched_and_checks_session_in() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let session = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;

        let (status, record) = app
            .post(
                "/api/attendance",
                json!({
                    "sessionId": session,
                    "attended": true,
                    "checkInTime": "2026-10-16T08:55:00Z",
                    "notes": "on time",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record["attended"], true);
        assert_eq!(record["checkInTime"], "2026-10-16T08:55:00Z");
        assert!(record["checkOutTime"].is_null());
        assert_eq!(record["sessionDateTime"], "2026-10-16T09:00");
        assert_eq!(record["therapistName"], "Dr Lee");
        assert_eq!(record["patientName"], "Ana");
        assert!(record["recordedAt"].is_string());

        let (_, session) = app.get(&format!("/api/sessions/{session}")).await;
        assert_eq!(session["status"], "Checked-In");

        let (_, list) = app.get("/api/attendance").await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], record["id"]);
    }

    #[tokio::test]
    async fn second_record_for_a_session_is_rejected() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let session = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;

        let body = json!({ "sessionId": session, "attended": true });
        let (status, _) = app.post("/api/attendance", body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, json) = app.post("/api/attendance", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Attendance already recorded for this session");
        assert_eq!(app.state.read().await.attendance().len(), 1);
    }

    #[tokio::test]
    async fn missing_flag_and_unknown_session_are_rejected() {
        let app = make_test_app();

        let (status, json) = app.post("/api/attendance", json!({ "sessionId": "abc" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "SessionId and attended status are required");

        let (status, json) = app
            .post("/api/attendance", json!({ "sessionId": "abc", "attended": false }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid session ID");
    }

    #[tokio::test]
    async fn check_out_time_completes_session() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let session = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;

        let (status, _) = app
            .post(
                "/api/attendance",
                json!({
                    "sessionId": session,
                    "attended": true,
                    "checkInTime": "2026-10-16T09:00:00Z",
                    "checkOutTime": "2026-10-16T09:45:00Z",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, session) = app.get(&format!("/api/sessions/{session}")).await;
        assert_eq!(session["status"], "Completed");
    }
}
