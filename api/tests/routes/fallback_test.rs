#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use api::error::handle_panic;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let app = make_test_app();

        for uri in ["/api/nothing-here", "/elsewhere", "/api/sessions/abc/cancel"] {
            let (status, json) = app.get(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(json, json!({ "error": "Route not found" }));
        }
    }

    #[tokio::test]
    async fn unsupported_method_is_json_404() {
        let app = make_test_app();

        let (status, json) = app.delete("/api/therapists").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Route not found");

        let (status, _) = app.post("/api/health", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_json_is_a_400_with_error_body() {
        let app = make_test_app();

        let req = Request::builder()
            .method("POST")
            .uri("/api/patients")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.router.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
    }

    async fn boom() -> &'static str {
        panic!("kaboom")
    }

    #[tokio::test]
    async fn panics_become_generic_500() {
        let router: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let req = Request::builder().uri("/boom").body(Body::empty()).unwrap();
        let response = router.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "error": "Something went wrong!" }));
    }
}
