//! Hello module — minimal connectivity check

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed greeting payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloReply {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/hello",
    tag = "Hello",
    responses(
        (status = 200, description = "Greeting", body = HelloReply)
    )
)]
pub async fn hello() -> Json<HelloReply> {
    Json(HelloReply {
        message: "Hello world!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    #[tokio::test]
    async fn greets_the_world() {
        let app = Router::new().route("/hello", get(hello));
        let resp = app
            .oneshot(Request::builder().uri("/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Hello world!"}));
    }
}
