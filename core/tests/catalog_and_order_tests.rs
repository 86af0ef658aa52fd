// tests/catalog_and_order_tests.rs
mod common;

use chrono::Duration;
use common::*;
use storefront::models::{OrderRequest, DEFAULT_ORDER_STATUS};
use storefront::services::{order_service, product_service};
use storefront::{Database, Decimal, StorefrontError};

fn order_for(product_name: &str) -> OrderRequest {
  OrderRequest {
    product_name: product_name.to_string(),
    notes: None,
  }
}

#[tokio::test]
async fn test_create_product_assigns_id_and_creation_time() {
  let (_db, mut session) = fresh_session().await;

  let product = create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;

  assert_eq!(product.id, 1);
  assert_eq!(product.price, Decimal::new(999, 2));
  assert_eq!(product.stock, 5);
  assert!(product.created_date <= chrono::Utc::now());
}

#[tokio::test]
async fn test_create_product_rounds_price_to_cents() {
  let (_db, mut session) = fresh_session().await;

  let product = product_service::create(session.as_mut(), new_product("Widget", Decimal::new(99949, 4), 1))
    .await
    .unwrap();

  assert_eq!(product.price, Decimal::new(999, 2));
}

#[tokio::test]
async fn test_create_product_with_taken_name_is_conflict() {
  let (_db, mut session) = fresh_session().await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;

  let result = product_service::create(session.as_mut(), new_product("Widget", Decimal::new(100, 2), 1)).await;

  match result {
    Err(StorefrontError::Conflict(msg)) => assert_eq!(msg, "Product with the name Widget already exists"),
    other => panic!("Expected Conflict, got {:?}", other),
  }
}

#[tokio::test]
async fn test_list_all_returns_products_in_insertion_order() {
  let (_db, mut session) = fresh_session().await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;
  create_product(session.as_mut(), "Gadget", Decimal::new(1500, 2)).await;

  let products = product_service::list_all(session.as_mut()).await.unwrap();

  let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["Widget", "Gadget"]);
}

#[tokio::test]
async fn test_get_by_name() {
  let (_db, mut session) = fresh_session().await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;

  let found = product_service::get_by_name(session.as_mut(), "Widget").await.unwrap();
  assert_eq!(found.name, "Widget");

  let missing = product_service::get_by_name(session.as_mut(), "Gizmo").await;
  assert!(matches!(missing, Err(StorefrontError::NotFound(_))));
}

#[tokio::test]
async fn test_place_order_computes_deadline_total_and_status() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;

  let request = OrderRequest {
    product_name: "Widget".to_string(),
    notes: Some("leave at the door".to_string()),
  };
  let order = order_service::place_order(session.as_mut(), request, "bob").await.unwrap();

  assert_eq!(order.user_username, "bob");
  assert_eq!(order.product_name, "Widget");
  assert_eq!(order.status, DEFAULT_ORDER_STATUS);
  assert_eq!(order.total, Decimal::new(999, 2));
  assert_eq!(order.deadline - order.order_date, Duration::days(7));
  assert_eq!(order.notes.as_deref(), Some("leave at the door"));
}

#[tokio::test]
async fn test_place_order_for_missing_product_is_not_found() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;

  let result = order_service::place_order(session.as_mut(), order_for("Nothing"), "bob").await;

  match result {
    Err(StorefrontError::NotFound(msg)) => assert_eq!(msg, "Product not found"),
    other => panic!("Expected NotFound, got {:?}", other),
  }
}

#[tokio::test]
async fn test_second_order_for_same_product_is_conflict() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;
  order_service::place_order(session.as_mut(), order_for("Widget"), "bob").await.unwrap();

  let second = order_service::place_order(session.as_mut(), order_for("Widget"), "bob").await;

  match second {
    Err(StorefrontError::Conflict(msg)) => assert_eq!(msg, "You already have an active order with this product"),
    other => panic!("Expected Conflict, got {:?}", other),
  }
}

#[tokio::test]
async fn test_different_users_may_order_same_product() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;
  register(session.as_mut(), "amy", "amy@x.com").await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;

  order_service::place_order(session.as_mut(), order_for("Widget"), "bob").await.unwrap();
  let amy_order = order_service::place_order(session.as_mut(), order_for("Widget"), "amy").await.unwrap();

  assert_eq!(amy_order.id, 2);
}

#[tokio::test]
async fn test_sessions_from_one_database_share_state() {
  let (db, mut first) = fresh_session().await;
  create_product(first.as_mut(), "Widget", Decimal::new(999, 2)).await;
  drop(first);

  let mut second = db.acquire().await.unwrap();
  let products = product_service::list_all(second.as_mut()).await.unwrap();

  assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn test_create_product_rejects_price_outside_numeric_column() {
  let (_db, mut session) = fresh_session().await;

  for price in [Decimal::new(100_000_000, 2), Decimal::new(-100_000_00, 2), Decimal::new(99_999_999, 3)] {
    let result = product_service::create(session.as_mut(), new_product("Big", price, 1)).await;
    assert!(matches!(result, Err(StorefrontError::Validation(_))), "price {} gave {:?}", price, result);
  }
  assert!(product_service::list_all(session.as_mut()).await.unwrap().is_empty());

  let largest = product_service::create(session.as_mut(), new_product("Big", Decimal::new(9_999_999, 2), 1))
    .await
    .unwrap();
  assert_eq!(largest.price, Decimal::new(9_999_999, 2));
}

#[tokio::test]
async fn test_create_product_rejects_long_name_and_description() {
  let (_db, mut session) = fresh_session().await;

  let long_name = new_product(&"n".repeat(51), Decimal::new(100, 2), 1);
  let mut long_description = new_product("Widget", Decimal::new(100, 2), 1);
  long_description.description = "d".repeat(151);

  for candidate in [long_name, long_description] {
    let result = product_service::create(session.as_mut(), candidate).await;
    assert!(matches!(result, Err(StorefrontError::Validation(_))), "got {:?}", result);
  }
}

#[tokio::test]
async fn test_place_order_rejects_long_notes() {
  let (_db, mut session) = fresh_session().await;
  register(session.as_mut(), "bob", "bob@x.com").await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;

  let request = OrderRequest {
    product_name: "Widget".to_string(),
    notes: Some("x".repeat(151)),
  };
  let result = order_service::place_order(session.as_mut(), request, "bob").await;

  assert!(matches!(result, Err(StorefrontError::Validation(_))));
}

#[tokio::test]
async fn test_place_order_for_unknown_user_is_not_found() {
  let (_db, mut session) = fresh_session().await;
  create_product(session.as_mut(), "Widget", Decimal::new(999, 2)).await;

  let result = order_service::place_order(session.as_mut(), order_for("Widget"), "ghost").await;

  match result {
    Err(StorefrontError::NotFound(msg)) => assert_eq!(msg, "User not found"),
    other => panic!("Expected NotFound, got {:?}", other),
  }
}
