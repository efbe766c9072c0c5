#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let app = make_test_app();

        let (status, json) = app.get("/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "OK");
        assert!(json["message"].as_str().unwrap().ends_with("API is running"));
    }
}
