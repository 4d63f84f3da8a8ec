//! Billing Service route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{get_bill, home, BillingState};

/// Create the Billing Service router.
pub fn create_router(state: BillingState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/bill/:customer_id", get(get_bill))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use crate::billing::client::DirectoryClient;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn home_returns_service_banner() {
        let state = BillingState::new(DirectoryClient::with_base_url(
            "http://127.0.0.1:9/customers",
        ));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Billing Service is running!");
    }

    #[tokio::test]
    async fn bill_returns_500_when_directory_unreachable() {
        let state = BillingState::new(DirectoryClient::with_base_url(
            "http://127.0.0.1:9/customers",
        ));
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/bill/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(json["error"].is_string());
    }
}
