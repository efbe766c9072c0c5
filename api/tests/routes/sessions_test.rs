#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::http::StatusCode;
    use chrono::{Duration, Local};
    use serde_json::json;

    #[tokio::test]
    async fn create_then_complete_via_put() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;

        let (status, created) = app
            .post(
                "/api/sessions",
                json!({
                    "therapistId": therapist,
                    "patientId": patient,
                    "dateTime": "2026-10-16T09:00",
                    "duration": 60,
                    "sessionType": "Evaluation",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "Scheduled");
        assert_eq!(created["sessionType"], "Evaluation");
        assert_eq!(created["therapistName"], "Dr Lee");
        assert_eq!(created["patientName"], "Ana");
        assert!(created.get("updatedAt").is_none());

        let id = created["id"].as_str().unwrap();
        let (status, updated) = app
            .put(&format!("/api/sessions/{id}"), json!({ "status": "completed" }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "Completed");
        assert!(updated["updatedAt"].is_string());
        for field in ["therapistId", "patientId", "dateTime", "duration", "sessionType", "notes", "createdAt"] {
            assert_eq!(updated[field], created[field], "{field} changed");
        }
    }

    #[tokio::test]
    async fn missing_fields_and_unknown_patient_are_400() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;

        let (status, json) = app
            .post("/api/sessions", json!({ "therapistId": therapist, "dateTime": "2026-10-16T09:00" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "TherapistId, patientId, dateTime, and duration are required");

        let (status, json) = app
            .post(
                "/api/sessions",
                json!({
                    "therapistId": therapist,
                    "patientId": "ghost",
                    "dateTime": "2026-10-16T09:00",
                    "duration": 30,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid patient ID");
    }

    #[tokio::test]
    async fn put_validates_before_writing() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let id = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;

        let (status, json) = app
            .put(&format!("/api/sessions/{id}"), json!({ "patientId": "ghost", "notes": "x" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid patient ID");

        let (status, json) = app
            .put("/api/sessions/missing", json!({ "notes": "x" }))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Session not found");

        let (_, current) = app.get(&format!("/api/sessions/{id}")).await;
        assert_eq!(current["notes"], "");
        assert!(current.get("updatedAt").is_none());
    }

    #[tokio::test]
    async fn status_only_moves_forward() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let id = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;

        let (status, json) = app
            .post(&format!("/api/sessions/{id}/complete"), json!({}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Cannot complete a session that is Scheduled");

        let (status, json) = app
            .post(&format!("/api/sessions/{id}/check-in"), json!({}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "Checked-In");

        let (status, _) = app
            .put(&format!("/api/sessions/{id}"), json!({ "status": "Scheduled" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = app
            .post(&format!("/api/sessions/{id}/complete"), json!({}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "Completed");

        let (status, _) = app.post("/api/sessions/missing/check-in", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_is_soonest_first_and_filters_by_date() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        for dt in ["2026-10-18T09:00", "2026-10-16T14:00", "2026-10-16T08:30"] {
            app.create_session(&therapist, &patient, dt).await;
        }

        let (_, all) = app.get("/api/sessions").await;
        let order: Vec<&str> = all
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["dateTime"].as_str().unwrap())
            .collect();
        assert_eq!(order, ["2026-10-16T08:30", "2026-10-16T14:00", "2026-10-18T09:00"]);

        let (status, day) = app.get("/api/sessions?date=2026-10-16").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(day.as_array().unwrap().len(), 2);

        let (status, json) = app.get("/api/sessions?date=tomorrow").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid date");
    }

    #[tokio::test]
    async fn today_and_upcoming_use_the_local_clock() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;

        let now = Local::now().naive_local();
        let fmt = "%Y-%m-%dT%H:%M:%S";
        let soon = (now + Duration::minutes(5)).format(fmt).to_string();
        let later = (now + Duration::days(3)).format(fmt).to_string();
        let far = (now + Duration::days(40)).format(fmt).to_string();
        let past = (now - Duration::days(2)).format(fmt).to_string();
        for dt in [&soon, &later, &far, &past] {
            app.create_session(&therapist, &patient, dt).await;
        }

        let (_, upcoming) = app.get("/api/sessions/upcoming").await;
        let upcoming: Vec<&str> = upcoming
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["dateTime"].as_str().unwrap())
            .collect();
        assert_eq!(upcoming, [soon.as_str(), later.as_str()]);

        let (_, wide) = app.get("/api/sessions/upcoming?days=60").await;
        assert_eq!(wide.as_array().unwrap().len(), 3);

        let (status, _) = app.get("/api/sessions/upcoming?days=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let today = now.date().format("%Y-%m-%d").to_string();
        let (_, todays) = app.get("/api/sessions/today").await;
        for session in todays.as_array().unwrap() {
            assert!(session["dateTime"].as_str().unwrap().starts_with(&today));
        }
    }

    #[tokio::test]
    async fn delete_removes_session_and_attendance() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let id = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;
        app.post("/api/attendance", json!({ "sessionId": id, "attended": false }))
            .await;

        let (status, summary) = app.delete(&format!("/api/sessions/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary, json!({ "sessionsRemoved": 1, "attendanceRemoved": 1 }));

        let (status, _) = app.get(&format!("/api/sessions/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = app.delete(&format!("/api/sessions/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn absent_session_cannot_be_checked_in() {
        let app = make_test_app();
        let therapist = app.create_therapist("Dr Lee").await;
        let patient = app.create_patient("Ana").await;
        let id = app.create_session(&therapist, &patient, "2026-10-16T09:00").await;
        let (status, _) = app
            .post("/api/attendance", json!({ "sessionId": id, "attended": false }))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, json) = app.post(&format!("/api/sessions/{id}/check-in"), json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Cannot check in a session recorded as absent");

        let (status, _) = app
            .put(&format!("/api/sessions/{id}"), json!({ "status": "Completed" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, session) = app.get(&format!("/api/sessions/{id}")).await;
        assert_eq!(session["status"], "Scheduled");
    }

    #[tokio::test]
    async fn malformed_query_and_path_get_json_errors() {
        let app = make_test_app();

        let (status, json) = app.get("/api/sessions?date=2026-10-16&date=2026-10-17").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("date"));

        let (status, json) = app.get("/api/sessions/upcoming?days=1&days=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());

        let (status, json) = app.get("/api/sessions/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }
}
