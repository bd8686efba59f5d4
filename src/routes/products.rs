use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState, catalog,
    error::{AppError, Result},
    models::{self, CatalogFilter, CatalogQuery, CatalogResponse, Product},
};

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>> {
    let filter = build_filter(params, state.default_top)?;

    catalog::refresh_catalog(&state, &filter).await;

    let (products, loading) = state.view.snapshot();
    Ok(Json(CatalogResponse { products, loading }))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    match state.backend.product(id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(AppError::NotFound(format!("Product {} not found", id))),
        Err(e) => {
            // failures degrade to the not-found state; diagnostics only
            tracing::error!("Detail lookup for product {} failed: {}", id, e);
            Err(AppError::NotFound(format!("Product {} not found", id)))
        }
    }
}

fn build_filter(params: CatalogQuery, default_top: u32) -> Result<CatalogFilter> {
    // an empty category param means "no category selected"
    let category = params.category.filter(|c| !c.is_empty());

    if let Some(ref category) = category {
        if !models::is_known_category(category) {
            return Err(AppError::BadRequest(format!(
                "Unknown category: {}",
                category
            )));
        }
    }

    let top = params.top.unwrap_or(default_top);
    if top == 0 {
        return Err(AppError::BadRequest(
            "top must be greater than zero".to_string(),
        ));
    }

    Ok(CatalogFilter {
        category,
        company: params.company,
        top,
        min_price: params.min_price,
        max_price: params.max_price,
    })
}
