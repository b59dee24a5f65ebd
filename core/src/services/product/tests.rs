//! Unit tests for the product catalog service.

use std::sync::Arc;

use crate::domain::entities::category::Category;
use crate::errors::{DomainError, ProductError};
use crate::repositories::category::mock::MockCategoryRepository;
use crate::repositories::product::mock::MockProductRepository;
use crate::repositories::CategoryRepository;

use super::{CreateProduct, ProductService, UpdateProduct};

struct Fixture {
    service: ProductService<MockProductRepository, MockCategoryRepository>,
    products: Arc<MockProductRepository>,
    categories: Arc<MockCategoryRepository>,
}

fn fixture() -> Fixture {
    let products = Arc::new(MockProductRepository::new());
    let categories = Arc::new(MockCategoryRepository::new());
    Fixture {
        service: ProductService::new(products.clone(), categories.clone()),
        products,
        categories,
    }
}

impl Fixture {
    /// Resolve the category up front and mirror it into the product mock's
    /// side table so created products come back with it attached.
    async fn seed_category(&self, name: &str) -> Category {
        let category = self.categories.find_or_create(name).await.unwrap();
        self.products.insert_category(category.clone()).await;
        category
    }
}

fn pen(category_name: &str) -> CreateProduct {
    CreateProduct {
        title: "Pen".to_string(),
        price: 1.5,
        description: "blue".to_string(),
        category_name: category_name.to_string(),
    }
}

#[tokio::test]
async fn test_create_returns_product_with_nested_category() {
    let fx = fixture();
    fx.seed_category("Stationery").await;

    let product = fx.service.create(pen("Stationery")).await.unwrap();

    assert_eq!(product.title, "Pen");
    assert_eq!(product.price, 1.5);
    assert_eq!(product.category.name, "Stationery");
    assert_eq!(fx.products.len().await, 1);
}

#[tokio::test]
async fn test_create_duplicate_title_rejected_before_category_insert() {
    let fx = fixture();
    fx.seed_category("Stationery").await;
    fx.service.create(pen("Stationery")).await.unwrap();

    // Same title under a brand-new category name
    let err = fx.service.create(pen("Garden")).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::ProductAlreadyExists)
    ));

    // The rejected create never reached category resolution
    assert_eq!(fx.categories.len().await, 1);
    assert_eq!(fx.products.len().await, 1);
}

#[tokio::test]
async fn test_products_sharing_a_category_share_its_row() {
    let fx = fixture();
    fx.seed_category("Stationery").await;

    let first = fx.service.create(pen("Stationery")).await.unwrap();
    let second = fx
        .service
        .create(CreateProduct {
            title: "Pencil".to_string(),
            price: 0.5,
            description: "HB".to_string(),
            category_name: "Stationery".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(first.category.id, second.category.id);
    assert_eq!(fx.categories.len().await, 1);
}

#[tokio::test]
async fn test_find_one_unknown_id() {
    let fx = fixture();
    let err = fx.service.find_one(42).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::ProductNotFound)
    ));
}

#[tokio::test]
async fn test_find_all_empty_catalog() {
    let fx = fixture();
    assert!(fx.service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_merges_only_supplied_fields() {
    let fx = fixture();
    fx.seed_category("Stationery").await;
    let created = fx.service.create(pen("Stationery")).await.unwrap();

    let updated = fx
        .service
        .update(
            created.id,
            UpdateProduct {
                price: Some(2.0),
                ..UpdateProduct::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Pen");
    assert_eq!(updated.description, "blue");
    assert_eq!(updated.price, 2.0);
    // Category untouched when no name is supplied
    assert_eq!(updated.category.id, created.category.id);
    assert_eq!(fx.categories.len().await, 1);
}

#[tokio::test]
async fn test_update_with_category_name_re_resolves() {
    let fx = fixture();
    fx.seed_category("Stationery").await;
    let created = fx.service.create(pen("Stationery")).await.unwrap();

    let updated = fx
        .service
        .update(
            created.id,
            UpdateProduct {
                category_name: Some("Office".to_string()),
                ..UpdateProduct::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.category.name, "Office");
    assert_ne!(updated.category.id, created.category.id);
    assert_eq!(fx.categories.len().await, 2);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let fx = fixture();
    let err = fx
        .service
        .update(42, UpdateProduct::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::ProductNotFound)
    ));
}

#[tokio::test]
async fn test_replace_overwrites_everything_but_id() {
    let fx = fixture();
    fx.seed_category("Stationery").await;
    let created = fx.service.create(pen("Stationery")).await.unwrap();

    let replaced = fx
        .service
        .replace(
            created.id,
            CreateProduct {
                title: "Pencil".to_string(),
                price: 0.5,
                description: "HB".to_string(),
                category_name: "Office".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.title, "Pencil");
    assert_eq!(replaced.description, "HB");
    assert_eq!(replaced.price, 0.5);
    assert_eq!(replaced.category.name, "Office");
}

#[tokio::test]
async fn test_replace_with_same_category_name_keeps_its_row() {
    let fx = fixture();
    fx.seed_category("Stationery").await;
    let created = fx.service.create(pen("Stationery")).await.unwrap();

    let replaced = fx
        .service
        .replace(
            created.id,
            CreateProduct {
                title: "Pen".to_string(),
                price: 2.0,
                description: "red".to_string(),
                category_name: "Stationery".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(replaced.price, 2.0);
    assert_eq!(replaced.description, "red");
    assert_eq!(replaced.category.id, created.category.id);
    assert_eq!(fx.categories.len().await, 1);
}

#[tokio::test]
async fn test_replace_unknown_id() {
    let fx = fixture();
    let err = fx.service.replace(42, pen("Stationery")).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::ProductNotFound)
    ));
}

#[tokio::test]
async fn test_delete_removes_product() {
    let fx = fixture();
    fx.seed_category("Stationery").await;
    let created = fx.service.create(pen("Stationery")).await.unwrap();

    fx.service.delete(created.id).await.unwrap();
    assert_eq!(fx.products.len().await, 0);
}

#[tokio::test]
async fn test_delete_unknown_id_never_reaches_the_store() {
    let fx = fixture();
    let err = fx.service.delete(42).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Product(ProductError::ProductNotFound)
    ));
    assert_eq!(fx.products.delete_call_count(), 0);
}
