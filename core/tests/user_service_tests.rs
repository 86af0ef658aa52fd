// tests/user_service_tests.rs
mod common;

use common::*;
use storefront::models::OrderRequest;
use storefront::services::{auth_service, order_service, user_service};
use storefront::store::UserStore;
use storefront::{Decimal, StorefrontError};

#[tokio::test]
async fn test_register_returns_user_with_hashed_password() {
  let (_db, mut session) = fresh_session().await;

  let user = register(session.as_mut(), "bob", "bob@x.com").await;

  assert_eq!(user.username, "bob");
  assert_eq!(user.email, "bob@x.com");
  assert_ne!(user.password, "pw");
  assert!(auth_service::verify_password(&user.password, "pw").unwrap());
}

#[tokio::test]
async fn test_register_lowercases_email() {
  let (_db, mut session) = fresh_session().await;

  let user = register(session.as_mut(), "foo", "Foo@Bar.com").await;

  assert_eq!(user.email, "foo@bar.com");
  let stored = session.user_by_email("foo@bar.com").await.unwrap();
  assert!(stored.is_some());
}

#[tokio::test]
async fn test_register_duplicate_username_is_conflict() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;

  let result = user_service::register(session.as_mut(), new_user("bob", "other@x.com")).await;

  match result {
    Err(StorefrontError::Conflict(msg)) => assert_eq!(msg, "Username already exists"),
    other => panic!("Expected Conflict, got {:?}", other),
  }
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;

  let result = user_service::register(session.as_mut(), new_user("robert", "BOB@x.com")).await;

  match result {
    Err(StorefrontError::Conflict(msg)) => assert_eq!(msg, "Email already exists"),
    other => panic!("Expected Conflict, got {:?}", other),
  }
}

#[tokio::test]
async fn test_user_json_never_contains_password() {
  let (_db, mut session) = fresh_session().await;
  let user = register(session.as_mut(), "bob", "bob@x.com").await;

  let json = serde_json::to_value(&user).unwrap();

  assert!(json.get("password").is_none());
  assert_eq!(json["username"], "bob");
}

#[tokio::test]
async fn test_list_orders_for_unknown_user_is_not_found() {
  let (_db, mut session) = fresh_session().await;

  let result = user_service::list_orders_for(session.as_mut(), "ghost").await;

  assert!(matches!(result, Err(StorefrontError::NotFound(_))));
}

#[tokio::test]
async fn test_list_orders_for_returns_only_that_users_orders() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;
  register(session.as_mut(), "amy", "amy@x.com").await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;
  create_product(session.as_mut(), "Gadget", Decimal::new(1500, 2)).await;

  for (user, product) in [("bob", "Widget"), ("amy", "Widget"), ("bob", "Gadget")] {
    let request = OrderRequest {
      product_name: product.to_string(),
      notes: None,
    };
    order_service::place_order(session.as_mut(), request, user).await.unwrap();
  }

  let orders = user_service::list_orders_for(session.as_mut(), "bob").await.unwrap();

  let products: Vec<&str> = orders.iter().map(|o| o.product_name.as_str()).collect();
  assert_eq!(products, vec!["Widget", "Gadget"]);
  assert!(orders.iter().all(|o| o.user_username == "bob"));
}

#[tokio::test]
async fn test_user_with_no_orders_gets_empty_list() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;

  let orders = user_service::list_orders_for(session.as_mut(), "bob").await.unwrap();

  assert!(orders.is_empty());
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
  let (_db, mut session) = fresh_session().await;

  let result = user_service::register(session.as_mut(), new_user("bob", "not-an-email")).await;

  match result {
    Err(StorefrontError::Validation(msg)) => assert!(msg.contains("Invalid email format")),
    other => panic!("Expected Validation, got {:?}", other),
  }
  assert!(session.user_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_rejects_fields_wider_than_their_columns() {
  let (_db, mut session) = fresh_session().await;

  let long_username = new_user(&"u".repeat(31), "bob@x.com");
  let mut long_address = new_user("bob", "bob@x.com");
  long_address.address = "a".repeat(51);
  let long_email = new_user("bob", &format!("{}@x.com", "e".repeat(45)));

  for candidate in [long_username, long_address, long_email] {
    let result = user_service::register(session.as_mut(), candidate).await;
    assert!(matches!(result, Err(StorefrontError::Validation(_))), "got {:?}", result);
  }

  let at_limit = user_service::register(session.as_mut(), new_user(&"u".repeat(30), "bob@x.com")).await;
  assert!(at_limit.is_ok());
}
