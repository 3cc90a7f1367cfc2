use customer_service::backend::memory::SeedData;
use http::StatusCode;
use serde_json::{json, Value};

mod common;

use common::{customer_json, customer_path, id_from_location, list_customers, CUSTOMERS};

#[tokio::test]
async fn test_list_seeded_customers() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        let customers = list_customers(&server).await;

        assert_eq!(customers.len(), 2, "{:?}", store_type);
        assert_eq!(customers[0]["id"], 1);
        assert_eq!(customers[0]["name"], "Alex");
        assert_eq!(customers[0]["email"], "alex@gmail.com");
        assert_eq!(customers[0]["age"], 22);
        assert_eq!(customers[1]["id"], 2);
        assert_eq!(customers[1]["name"], "Jamila");
        assert_eq!(customers[1]["age"], 25);
    }
}

#[tokio::test]
async fn test_seed_without_age() {
    let server = common::setup_test_server(customer_service::StoreType::List, SeedData::WithoutAge).await;

    let customers = list_customers(&server).await;
    assert_eq!(customers.len(), 2);
    assert!(customers.iter().all(|c| c["age"].is_null()));
}

#[tokio::test]
async fn test_customer_crud_operations() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::None).await;

        // Register
        let create_response = server
            .post(CUSTOMERS)
            .json(&customer_json("Maria", "maria@example.com", Some(31)))
            .await;
        assert_eq!(create_response.status_code(), StatusCode::CREATED, "{:?}", store_type);

        let location = create_response.header("location");
        let location = location.to_str().unwrap();
        assert!(location.ends_with("/customers/1"), "{}", location);
        let id = id_from_location(location);

        // Read
        let get_response = server.get(&customer_path(id)).await;
        get_response.assert_status_ok();
        let customer: Value = get_response.json();
        assert_eq!(customer["id"], id);
        assert_eq!(customer["name"], "Maria");
        assert_eq!(customer["email"], "maria@example.com");
        assert_eq!(customer["age"], 31);

        // Update
        let update_response = server
            .put(&customer_path(id))
            .json(&json!({ "name": "Maria Lopez", "age": 32 }))
            .await;
        update_response.assert_status_ok();

        let customer: Value = server.get(&customer_path(id)).await.json();
        assert_eq!(customer["name"], "Maria Lopez");
        assert_eq!(customer["email"], "maria@example.com");
        assert_eq!(customer["age"], 32);

        // Delete
        server.delete(&customer_path(id)).await.assert_status_ok();

        let get_response = server.get(&customer_path(id)).await;
        get_response.assert_status(StatusCode::NOT_FOUND);
        assert!(list_customers(&server).await.is_empty());
    }
}

#[tokio::test]
async fn test_register_without_age() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        server
            .post(CUSTOMERS)
            .json(&customer_json("Ana", "ana@example.com", None))
            .await
            .assert_status(StatusCode::CREATED);

        let customers = list_customers(&server).await;
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[2]["id"], 3);
        assert!(customers[2]["age"].is_null());
    }
}

#[tokio::test]
async fn test_get_unknown_customer_returns_404() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        let response = server.get(&customer_path(99)).await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "Customer with id [99] not found!");
    }
}

#[tokio::test]
async fn test_duplicate_email_registration_returns_409() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        let response = server
            .post(CUSTOMERS)
            .json(&customer_json("Other Alex", "alex@gmail.com", Some(40)))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["message"], "Email already taken!");

        // Nothing was stored
        assert_eq!(list_customers(&server).await.len(), 2, "{:?}", store_type);
    }
}

#[tokio::test]
async fn test_update_without_changes_returns_400() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        let response = server
            .put(&customer_path(1))
            .json(&json!({ "name": "Alex", "email": "alex@gmail.com", "age": 22 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "No data changes found");

        let empty_response = server.put(&customer_path(1)).json(&json!({})).await;
        empty_response.assert_status(StatusCode::BAD_REQUEST);

        let customer: Value = server.get(&customer_path(1)).await.json();
        assert_eq!(customer["name"], "Alex");
        assert_eq!(customer["age"], 22);
    }
}

#[tokio::test]
async fn test_repeated_update_has_no_changes() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;
        let update = json!({ "name": "Alexander" });

        server
            .put(&customer_path(1))
            .json(&update)
            .await
            .assert_status_ok();

        let repeated = server.put(&customer_path(1)).json(&update).await;
        repeated.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_update_to_taken_email_returns_409() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        let response = server
            .put(&customer_path(1))
            .json(&json!({ "email": "jamila@gmail.com" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["message"], "Email already taken");

        let customer: Value = server.get(&customer_path(1)).await.json();
        assert_eq!(customer["email"], "alex@gmail.com");
    }
}

#[tokio::test]
async fn test_update_keeping_own_email_changes_other_fields() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        server
            .put(&customer_path(2))
            .json(&json!({ "email": "jamila@gmail.com", "age": 26 }))
            .await
            .assert_status_ok();

        let customer: Value = server.get(&customer_path(2)).await.json();
        assert_eq!(customer["name"], "Jamila");
        assert_eq!(customer["age"], 26);
    }
}

#[tokio::test]
async fn test_update_unknown_customer_returns_404() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        let response = server
            .put(&customer_path(42))
            .json(&json!({ "name": "Nobody" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Customer with id [42] not found!");
    }
}

#[tokio::test]
async fn test_delete_unknown_customer_returns_404() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        let response = server.delete(&customer_path(42)).await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Customer with id [42] not found");
        assert_eq!(list_customers(&server).await.len(), 2);
    }
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete_of_last() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        server.delete(&customer_path(2)).await.assert_status_ok();

        let response = server
            .post(CUSTOMERS)
            .json(&customer_json("Maria", "maria@example.com", None))
            .await;
        response.assert_status(StatusCode::CREATED);

        let location = response.header("location");
        assert_eq!(
            id_from_location(location.to_str().unwrap()),
            3,
            "{:?}",
            store_type
        );

        // The deleted customer stays gone
        server
            .get(&customer_path(2))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_invalid_payloads_return_400() {
    for store_type in common::ALL_STORES {
        let server = common::setup_test_server(store_type, SeedData::WithAge).await;

        server
            .post(CUSTOMERS)
            .json(&customer_json("", "blank@example.com", None))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post(CUSTOMERS)
            .json(&customer_json("Bad", "not-an-email", None))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .put(&customer_path(1))
            .json(&json!({ "age": -5 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        // Missing required field
        server
            .post(CUSTOMERS)
            .json(&json!({ "name": "No Email" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        assert_eq!(list_customers(&server).await.len(), 2);
    }
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let server = common::setup_test_server(customer_service::StoreType::List, SeedData::WithAge).await;

    for response in [
        server.get("/customers/abc").await,
        server.put("/customers/abc").json(&json!({ "name": "Test" })).await,
        server.delete("/customers/abc").await,
    ] {
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("Invalid path parameter"));
    }
}

#[tokio::test]
async fn test_ping() {
    let server = common::setup_test_server(customer_service::StoreType::List, SeedData::None).await;

    let response = server.get("/ping").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "result": "CD Test Success!" }));
}
