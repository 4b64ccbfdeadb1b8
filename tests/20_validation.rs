//! Validation layer behavior over the live router: rule sets run before
//! handler logic, violations are collected rather than fail-fast, and
//! malformed identifiers are handled errors.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, request, test_app, user_token};

#[tokio::test]
async fn registration_collects_every_violation() {
    let app = test_app();
    let response = app
        .oneshot(request(
            Method::POST,
            "/api/users/register",
            None,
            Some(json!({})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let errors = &body["field_errors"];
    assert_eq!(errors["name"], "Name is required");
    assert_eq!(errors["email"], "Invalid email format");
    assert_eq!(errors["password"], "Password must be at least 8 characters long");
}

#[tokio::test]
async fn registration_rejects_malformed_email_and_short_password() {
    let app = test_app();
    let response = app
        .oneshot(request(
            Method::POST,
            "/api/users/register",
            None,
            Some(json!({ "name": "Ada", "email": "nope", "password": "short" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let errors = &body["field_errors"];
    assert_eq!(errors["email"], "Invalid email format");
    assert_eq!(errors["password"], "Password must be at least 8 characters long");
    assert!(errors.get("name").is_none());
}

#[tokio::test]
async fn login_requires_a_password() {
    let app = test_app();
    let response = app
        .oneshot(request(
            Method::POST,
            "/api/users/login",
            None,
            Some(json!({ "email": "ada@example.com" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["field_errors"]["password"], "Password is required");
}

#[tokio::test]
async fn order_creation_validates_before_touching_the_database() {
    let token = user_token();

    let app = test_app();
    let response = app
        .oneshot(request(
            Method::POST,
            "/api/orders",
            Some(&token),
            Some(json!({ "products": [], "totalPrice": "ten" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let errors = &body["field_errors"];
    assert_eq!(errors["user"], "User is required");
    assert_eq!(errors["products"], "At least one product is required");
    assert_eq!(errors["totalPrice"], "Total price must be a number");
    assert_eq!(errors["shippingAddress"], "Shipping address is required");
    assert_eq!(errors["paymentMethod"], "Payment method is required");
}

#[tokio::test]
async fn cart_add_rejects_non_positive_quantities() {
    let token = user_token();

    let app = test_app();
    let response = app
        .oneshot(request(
            Method::POST,
            "/api/cart/add",
            Some(&token),
            Some(json!({ "productId": "p1", "quantity": 0 })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["field_errors"]["quantity"],
        "Quantity must be a positive integer"
    );
}

#[tokio::test]
async fn malformed_order_id_is_a_handled_error() {
    let token = user_token();

    let app = test_app();
    let response = app
        .oneshot(request(
            Method::DELETE,
            "/api/orders/not-a-uuid",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid order id");
}

#[tokio::test]
async fn malformed_product_id_is_a_handled_error_without_auth() {
    let app = test_app();
    let response = app
        .oneshot(request(Method::GET, "/api/products/not-a-uuid", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid product id");
}
