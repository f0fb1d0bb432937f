//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//! GET  /                        - Redirect to /customers
//!
//! # Customers
//! GET  /customers               - Customer list (q, sort, dir, page, view)
//! POST /customers               - Submit add-customer form
//! GET  /customers/new           - Add-customer form
//! POST /customers/{id}/delete   - Remove from this session's list
//!
//! # Shops
//! GET  /shops                   - Shop list (q, category, package, sort, dir, page, view)
//! POST /shops/{id}/delete       - Remove from this session's list
//! ```

pub mod customers;
pub mod shops;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the admin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        // Customers
        .route("/customers", get(customers::index).post(customers::create))
        .route("/customers/new", get(customers::new_form))
        .route("/customers/{id}/delete", post(customers::delete))
        // Shops
        .route("/shops", get(shops::index))
        .route("/shops/{id}/delete", post(shops::delete))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
async fn health() -> &'static str {
    "ok"
}

/// The customer list is the landing screen.
async fn root() -> Redirect {
    Redirect::to(customers::CUSTOMERS_PATH)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::config::AdminConfig;
    use crate::state::AppState;

    fn app() -> axum::Router {
        let config = AdminConfig::from_lookup(|_| None).unwrap();
        crate::app(AppState::new(config).unwrap())
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post_form(uri: &str, body: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_root_redirects_to_customers() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/customers");
    }

    #[tokio::test]
    async fn test_customers_first_page() {
        let (status, body) = get("/customers").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Customer List"));
        assert!(body.contains("Page 1 of 2"));
        // Name ascending: Alice, Bob, Charlie, Daisy, Ethan
        assert!(body.contains("Alice Brown"));
        assert!(body.contains("Ethan Blue"));
        assert!(!body.contains("Fiona Red"));
        assert!(body.contains("/view-customer/3"));
        assert!(body.contains("/update-customer/3"));
    }

    #[tokio::test]
    async fn test_customers_second_page() {
        let (_, body) = get("/customers?page=2").await;
        assert!(body.contains("Page 2 of 2"));
        assert!(body.contains("Fiona Red"));
        assert!(body.contains("Jane Smith"));
        assert!(body.contains("John Doe"));
        assert!(!body.contains("Alice Brown"));
    }

    #[tokio::test]
    async fn test_customers_search() {
        let (_, body) = get("/customers?q=JANE").await;
        assert!(body.contains("Jane Smith"));
        assert!(!body.contains("John Doe"));
        assert!(body.contains("Page 1 of 1"));
    }

    #[tokio::test]
    async fn test_customers_empty_result() {
        let (status, body) = get("/customers?q=nobody-matches-this").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No customers found"));
        assert!(body.contains("Page 1 of 0"));
    }

    #[tokio::test]
    async fn test_card_view_shows_same_customers() {
        let (_, list) = get("/customers?q=jane").await;
        let (_, card) = get("/customers?q=jane&view=card").await;
        assert!(list.contains(r#"class="data-table""#));
        assert!(!list.contains(r#"class="card-grid""#));
        assert!(card.contains(r#"class="card-grid""#));
        assert!(!card.contains(r#"class="data-table""#));
        assert!(card.contains("Jane Smith"));
        assert!(!card.contains("John Doe"));
    }

    #[tokio::test]
    async fn test_shops_category_filter() {
        let (status, body) = get("/shops?category=Medical").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Medical Supplies"));
        assert!(!body.contains("General Store"));
        assert!(body.contains("/update-shop/2"));
    }

    #[tokio::test]
    async fn test_shops_category_options_come_from_config() {
        let (_, body) = get("/shops").await;
        assert!(body.contains(r#"<option value="General">General Shop</option>"#));
        assert!(!body.contains(r#"<option value="Electronics""#));
        assert!(body.contains("Page 1 of 2"));
    }

    #[tokio::test]
    async fn test_new_customer_form() {
        let (status, body) = get("/customers/new").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"name="form_id""#));
        assert!(body.contains("Add Customer"));
    }

    #[tokio::test]
    async fn test_create_customer_validation_error() {
        let (status, body) = post_form(
            "/customers",
            "name=Jane&email=not-an-email&phone=123&address=Main+St",
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Error: Invalid email"));
        assert!(body.contains(r#"value="Jane""#));
    }

    #[tokio::test]
    async fn test_delete_redirects_with_controls() {
        let response = app()
            .oneshot(
                Request::post("/customers/2/delete?q=j&page=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/customers?q=j");
    }

    #[tokio::test]
    async fn test_delete_rejects_non_numeric_id() {
        let response = app()
            .oneshot(
                Request::post("/shops/abc/delete")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
