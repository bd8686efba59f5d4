use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::dec;
use serde_json::Value;

use topmart_back::{
    app,
    config::CorsConfig,
    error::{AppError, Result},
    models::{CatalogFilter, Company, Product, ProductPatch},
    sources::CatalogBackend,
    AppState,
};

/// Stand-in for the five upstream company catalogs. Records which companies
/// were queried so tests can assert on the fan-out.
#[derive(Default)]
struct StubCatalog {
    patches: Vec<(Company, ProductPatch)>,
    failing: Vec<Company>,
    detail: Option<Product>,
    detail_fails: bool,
    queried: Mutex<Vec<Company>>,
}

#[async_trait]
impl CatalogBackend for StubCatalog {
    async fn top_products(
        &self,
        company: Company,
        _filter: &CatalogFilter,
    ) -> Result<Vec<ProductPatch>> {
        self.queried.lock().unwrap().push(company);

        if self.failing.contains(&company) {
            return Err(AppError::InternalError(format!("{} is offline", company)));
        }

        Ok(self
            .patches
            .iter()
            .filter(|(c, _)| *c == company)
            .map(|(_, patch)| patch.clone())
            .collect())
    }

    async fn product(&self, id: i32) -> Result<Option<Product>> {
        if self.detail_fails {
            return Err(AppError::InternalError("detail source offline".to_string()));
        }

        Ok(self.detail.clone().filter(|p| p.id == id))
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(backend: Arc<StubCatalog>) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let state = AppState::new(backend, 5);
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        };
        let app = app::router(state, &cors).expect("failed to build router");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn detail_product() -> Product {
    Product {
        id: 7,
        name: "Gaming Keypad".to_string(),
        company: "SNP".to_string(),
        category: "keypad".to_string(),
        price: dec!(59.99),
        image_url: "https://via.placeholder.com/300?text=Gaming+Keypad".to_string(),
        rating: 5,
        discount: 5,
        available: true,
    }
}

#[tokio::test]
async fn catalog_merges_upstream_patches_onto_seed() {
    let backend = Arc::new(StubCatalog {
        patches: vec![
            (
                Company::Amz,
                ProductPatch {
                    id: 1,
                    price: Some(dec!(399.99)),
                    ..Default::default()
                },
            ),
            (
                Company::Myn,
                ProductPatch {
                    id: 4,
                    available: Some(false),
                    discount: Some(30),
                    ..Default::default()
                },
            ),
        ],
        ..Default::default()
    });
    let server = TestServer::spawn(backend.clone()).await;

    let body: Value = reqwest::get(&server.base_url)
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(body["loading"], Value::Bool(false));

    // price overridden, the rest of the seed entry preserved
    assert_eq!(products[0]["id"], 1);
    assert!((products[0]["price"].as_f64().unwrap() - 399.99).abs() < 1e-9);
    assert_eq!(products[0]["name"], "Smartphone XYZ");
    assert_eq!(products[0]["rating"], 4);

    assert_eq!(products[3]["available"], Value::Bool(false));
    assert_eq!(products[3]["discount"], 30);

    // untouched entries come back as seeded
    assert_eq!(products[2]["name"], "Bluetooth Speaker");
    assert!((products[2]["price"].as_f64().unwrap() - 79.99).abs() < 1e-9);

    // no company selected: every source is queried
    let queried = backend.queried.lock().unwrap().clone();
    assert_eq!(queried.len(), Company::ALL.len());
    for company in Company::ALL {
        assert!(queried.contains(&company));
    }
}

#[tokio::test]
async fn total_upstream_failure_degrades_to_seed() {
    let backend = Arc::new(StubCatalog {
        failing: Company::ALL.to_vec(),
        ..Default::default()
    });
    let server = TestServer::spawn(backend).await;

    let response = reqwest::get(&server.base_url).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let products = body["products"].as_array().unwrap();

    assert_eq!(products.len(), 5);
    assert_eq!(products[0]["name"], "Smartphone XYZ");
    assert!((products[0]["price"].as_f64().unwrap() - 499.99).abs() < 1e-9);
    assert_eq!(body["loading"], Value::Bool(false));
}

#[tokio::test]
async fn company_filter_narrows_the_fanout() {
    let backend = Arc::new(StubCatalog::default());
    let server = TestServer::spawn(backend.clone()).await;

    let response = reqwest::get(format!("{}/?company=FLP", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let queried = backend.queried.lock().unwrap().clone();
    assert_eq!(queried, vec![Company::Flp]);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let server = TestServer::spawn(Arc::new(StubCatalog::default())).await;

    let response = reqwest::get(format!("{}/?category=spaceship", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zero_top_is_rejected() {
    let server = TestServer::spawn(Arc::new(StubCatalog::default())).await;

    let response = reqwest::get(format!("{}/?top=0", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn detail_returns_the_upstream_record_as_is() {
    let backend = Arc::new(StubCatalog {
        detail: Some(detail_product()),
        ..Default::default()
    });
    let server = TestServer::spawn(backend).await;

    let body: Value = reqwest::get(format!("{}/product/7", server.base_url))
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["id"], 7);
    assert_eq!(body["name"], "Gaming Keypad");
    assert_eq!(body["imageUrl"], detail_product().image_url);
}

#[tokio::test]
async fn detail_for_a_missing_record_is_not_found() {
    let backend = Arc::new(StubCatalog {
        detail: Some(detail_product()),
        ..Default::default()
    });
    let server = TestServer::spawn(backend).await;

    let response = reqwest::get(format!("{}/product/42", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_upstream_failure_is_not_found() {
    let backend = Arc::new(StubCatalog {
        detail_fails: true,
        ..Default::default()
    });
    let server = TestServer::spawn(backend).await;

    let response = reqwest::get(format!("{}/product/7", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let server = TestServer::spawn(Arc::new(StubCatalog::default())).await;

    let body: Value = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}
