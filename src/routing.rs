//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{delete, get},
};

use crate::{
    AppState,
    category::{create_category_endpoint, delete_category_endpoint, list_categories_endpoint},
    endpoints,
    response::{failure, ok_message},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_summary_endpoint,
        get_transaction_endpoint, list_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .route(endpoints::CATEGORY, delete(delete_category_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .with_state(state)
}

async fn get_health() -> Response {
    ok_message("Server is running")
}

async fn get_404_not_found() -> Response {
    failure(StatusCode::NOT_FOUND, "Route not found")
}

async fn get_405_method_not_allowed() -> Response {
    failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState,
        category::Category,
        endpoints::{self, format_endpoint},
        response::ApiResponse,
        transaction::Transaction,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");
        let app = build_router(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn health_check_succeeds() {
        let server = get_test_server();

        let response = server.get(endpoints::HEALTH).await;

        response.assert_status_ok();
        let body: ApiResponse<()> = response.json();
        assert!(body.success);
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = get_test_server();

        let response = server.get("/api/nope").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ApiResponse<()> = response.json();
        assert_eq!(body, ApiResponse::failure("Route not found"));
    }

    #[tokio::test]
    async fn wrong_method_is_json_method_not_allowed() {
        let server = get_test_server();
        let transaction_path = format_endpoint(endpoints::TRANSACTION, uuid::Uuid::new_v4());

        let response = server.patch(&transaction_path).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        let body: ApiResponse<()> = response.json();
        assert_eq!(body, ApiResponse::failure("Method not allowed"));

        let response = server.put(endpoints::CATEGORIES).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        let body: ApiResponse<()> = response.json();
        assert_eq!(body, ApiResponse::failure("Method not allowed"));
    }

    #[tokio::test]
    async fn category_lifecycle() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Salary", "type": "income"}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let salary = response
            .json::<ApiResponse<Category>>()
            .data
            .expect("response should contain the category");

        server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Food", "type": "expense"}))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .get(endpoints::CATEGORIES)
            .add_query_param("type", "income")
            .await;
        response.assert_status_ok();
        let categories = response.json::<ApiResponse<Vec<Category>>>().data;
        assert_eq!(categories, Some(vec![salary.clone()]));

        server
            .delete(&format_endpoint(endpoints::CATEGORY, salary.id))
            .await
            .assert_status_ok();

        let categories = server
            .get(endpoints::CATEGORIES)
            .await
            .json::<ApiResponse<Vec<Category>>>()
            .data
            .unwrap_or_default();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name.as_ref(), "Food");
    }

    #[tokio::test]
    async fn category_json_uses_type_key() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Rent", "type": "expense"}))
            .await;

        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["name"], json!("Rent"));
        assert_eq!(body["data"]["type"], json!("expense"));
        assert!(body["data"]["id"].is_string());
    }

    #[tokio::test]
    async fn expense_over_balance_is_refused() {
        let server = get_test_server();
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({"type": "income", "category": "Salary", "amount": 100}))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({"type": "expense", "category": "Food", "amount": 30}))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({"type": "expense", "category": "Rent", "amount": 70.01}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
        assert!(
            body.message
                .unwrap_or_default()
                .starts_with("Insufficient balance")
        );

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({"type": "expense", "category": "Rent", "amount": "70"}))
            .await;
        response.assert_status(StatusCode::CREATED);

        let summary: Value = server.get(endpoints::TRANSACTIONS_SUMMARY).await.json();
        assert_eq!(
            summary["data"],
            json!({"totalIncome": 100.0, "totalExpense": 100.0, "balance": 0.0})
        );
    }

    #[tokio::test]
    async fn transaction_lifecycle() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "type": "income",
                "category": "Salary",
                "amount": 1200.5,
                "description": "Monthly pay"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response
            .json::<ApiResponse<Transaction>>()
            .data
            .expect("response should contain the transaction");
        let transaction_path = format_endpoint(endpoints::TRANSACTION, created.id);

        let fetched = server
            .get(&transaction_path)
            .await
            .json::<ApiResponse<Transaction>>()
            .data;
        assert_eq!(fetched, Some(created.clone()));

        let response = server
            .put(&transaction_path)
            .json(&json!({"description": null}))
            .await;
        response.assert_status_ok();
        let updated = response
            .json::<ApiResponse<Transaction>>()
            .data
            .expect("response should contain the transaction");
        assert_eq!(updated.description, None);
        assert_eq!(updated.amount, created.amount);

        let listed = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<ApiResponse<Vec<Transaction>>>()
            .data;
        assert_eq!(listed, Some(vec![updated]));

        let response = server.delete(&transaction_path).await;
        response.assert_status_ok();
        let body: ApiResponse<()> = response.json();
        assert_eq!(
            body,
            ApiResponse::success_message("Transaction deleted successfully")
        );

        server
            .get(&transaction_path)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .text("{\"type\": \"income\",")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::TRANSACTION, "12345"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert_eq!(body, ApiResponse::failure("Invalid ID format"));
    }

    #[tokio::test]
    async fn summary_is_not_parsed_as_id() {
        let server = get_test_server();

        server
            .get(endpoints::TRANSACTIONS_SUMMARY)
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn amount_too_large_for_a_decimal_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({"type": "income", "category": "Salary", "amount": 1e30}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
        assert!(
            body.message
                .unwrap_or_default()
                .starts_with("Invalid request body")
        );
        let listed = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<ApiResponse<Vec<Transaction>>>()
            .data;
        assert_eq!(listed, Some(Vec::new()));
    }

    #[tokio::test]
    async fn overflowing_balance_is_bad_request_and_server_keeps_working() {
        let server = get_test_server();
        for _ in 0..2 {
            server
                .post(endpoints::TRANSACTIONS)
                .json(&json!({
                    "type": "income",
                    "category": "Lottery",
                    "amount": "70000000000000000000000000000"
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({"type": "expense", "category": "Food", "amount": 1}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert_eq!(body, ApiResponse::failure("Amount is out of range"));

        let response = server.get(endpoints::TRANSACTIONS_SUMMARY).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert_eq!(body, ApiResponse::failure("Amount is out of range"));

        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({"type": "income", "category": "Gift", "amount": 1}))
            .await
            .assert_status(StatusCode::CREATED);
        let listed = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<ApiResponse<Vec<Transaction>>>()
            .data
            .unwrap_or_default();
        assert_eq!(listed.len(), 3);
    }
}
