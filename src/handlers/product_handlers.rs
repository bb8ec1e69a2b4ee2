//! HTTP handlers for the product catalog.
//!
//! - GET    /       -> every product, insertion order
//! - GET    /{id}   -> one product or 404
//! - POST   /       -> 201 with the created product
//! - PUT    /{id}   -> replaced product, 404 or 422
//! - DELETE /{id}   -> 204 or 404

use crate::{
    errors::AppError,
    models::product::{Product, ProductPayload},
    services::product_store::ProductStore,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

/// `GET /`
pub async fn list_products(State(store): State<ProductStore>) -> Json<Vec<Product>> {
    Json(store.list().await)
}

/// `GET /{id}`
pub async fn get_product(
    State(store): State<ProductStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = path?;
    Ok(Json(store.get(id).await?))
}

/// `POST /` — the server assigns the id.
pub async fn create_product(
    State(store): State<ProductStore>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body?;
    let product = store.create(payload).await;
    tracing::info!(id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /{id}` — replace a product, keeping its id.
pub async fn update_product(
    State(store): State<ProductStore>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = path?;
    let Json(payload) = body?;
    Ok(Json(store.update(id, payload).await?))
}

/// `DELETE /{id}`
pub async fn delete_product(
    State(store): State<ProductStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    store.delete(id).await?;
    tracing::info!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::{routes::routes::product_routes, services::product_store::ProductStore};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        product_routes().with_state(ProductStore::new())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn pen() -> Value {
        json!({"name": "Pen", "description": "Blue ink", "price": 1.5, "stock": 100})
    }

    #[tokio::test]
    async fn pen_lifecycle() {
        let app = app();

        let response = send(&app, "POST", "/", Some(pen())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let expected =
            json!({"id": 1, "name": "Pen", "description": "Blue ink", "price": 1.5, "stock": 100});
        assert_eq!(json_body(response).await, expected);

        let response = send(&app, "GET", "/1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, expected);

        let response = send(&app, "DELETE", "/1", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());

        let response = send(&app, "GET", "/1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Product not found"})
        );
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let app = app();
        for name in ["a", "b", "c", "d"] {
            let body = json!({"name": name, "description": "", "price": 0.0, "stock": 0});
            let response = send(&app, "POST", "/", Some(body)).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = send(&app, "GET", "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let list = json_body(response).await;
        let names: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let response = send(&app(), "GET", "/", None).await;
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn put_replaces_fields_and_keeps_id() {
        let app = app();
        send(&app, "POST", "/", Some(pen())).await;

        let body = json!({"name": "Pen", "description": "Red ink", "price": 2.0, "stock": 7});
        let response = send(&app, "PUT", "/1", Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = json_body(response).await;
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["description"], "Red ink");

        let fetched = json_body(send(&app, "GET", "/1", None).await).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn put_missing_is_not_found_and_store_unchanged() {
        let app = app();
        send(&app, "POST", "/", Some(pen())).await;

        let response = send(&app, "PUT", "/2", Some(pen())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let list = json_body(send(&app, "GET", "/", None).await).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], 1);
    }

    #[tokio::test]
    async fn put_with_conflicting_body_id_is_rejected() {
        let app = app();
        send(&app, "POST", "/", Some(pen())).await;

        let mut body = pen();
        body["id"] = json!(9);
        let response = send(&app, "PUT", "/1", Some(body)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let fetched = json_body(send(&app, "GET", "/1", None).await).await;
        assert_eq!(fetched["description"], "Blue ink");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let response = send(&app(), "DELETE", "/3", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_body_is_a_client_error() {
        let app = app();
        let body = json!({"name": "Pen", "description": "Blue ink", "price": "cheap", "stock": 1});
        let response = send(&app, "POST", "/", Some(body)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(response).await["detail"].is_string());

        let response = send(&app, "POST", "/", Some(json!({"name": "Pen"}))).await;
        assert!(response.status().is_client_error());

        let list = json_body(send(&app, "GET", "/", None).await).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let response = send(&app(), "GET", "/abc", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
