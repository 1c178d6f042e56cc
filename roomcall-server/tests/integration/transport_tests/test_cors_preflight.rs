use axum::body::Body;
use axum::http::{Request, header};

use crate::integration::init_tracing;
use crate::utils::{send, test_app};

#[tokio::test]
async fn test_preflight_allows_any_origin() {
    init_tracing();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/generate-token")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(test_app(), request).await;

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
