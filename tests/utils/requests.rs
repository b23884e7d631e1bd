use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

/// Status and decoded JSON envelope of one request
pub struct ApiCall {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiCall {
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    pub fn assert_success(&self) -> &Self {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        assert_eq!(self.body["success"], true);
        self
    }

    pub fn assert_failure(&self, status: StatusCode) -> &Self {
        assert_eq!(self.status, status, "body: {}", self.body);
        assert_eq!(self.body["success"], false);
        assert!(self.data().is_null());
        self
    }
}

async fn send(app: &Router, request: Request<Body>) -> ApiCall {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    ApiCall {
        status,
        body: serde_json::from_slice(&bytes).unwrap(),
    }
}

pub async fn post_session(app: &Router, body: Value) -> ApiCall {
    let request = Request::builder()
        .method("POST")
        .uri("/api/scores")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> ApiCall {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}
