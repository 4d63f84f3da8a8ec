//! Customer Directory route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{get_customer, home, list_customers, DirectoryState};

/// Create the Customer Directory router.
pub fn create_router(state: DirectoryState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/customers", get(list_customers))
        .route("/customers/:id", get(get_customer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use crate::customer::InMemoryCustomerRepository;

    fn test_router() -> Router {
        let state = DirectoryState::new(Arc::new(InMemoryCustomerRepository::seeded()));
        create_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn home_returns_service_banner() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Customer Service is running!");
    }

    #[tokio::test]
    async fn list_customers_returns_all_seeded_records() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/customers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "1": {"name": "Alice", "status": "active"},
                "2": {"name": "Bob", "status": "inactive"},
                "3": {"name": "Charlie", "status": "active"},
            })
        );
    }

    #[tokio::test]
    async fn get_customer_returns_record() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/customers/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"name": "Bob", "status": "inactive"}));
    }

    #[tokio::test]
    async fn get_unknown_customer_returns_404_with_error_body() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/customers/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"error": "Customer not found"}));
    }
}
