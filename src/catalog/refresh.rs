use futures::future::join_all;

use crate::app::AppState;
use crate::catalog::overlay;
use crate::models::{CatalogFilter, Company, ProductPatch};

/// Fans out one request per queried source, waits for the whole batch to
/// settle, overlays the flattened results onto the seed catalog and commits
/// the merged list unless a newer refresh has started in the meantime.
///
/// Best-effort: a failed source is logged and skipped; if every source fails
/// the view degrades to the unmodified seed catalog.
pub async fn refresh_catalog(state: &AppState, filter: &CatalogFilter) {
    let generation = state.view.begin_refresh();

    // a selected company narrows the fan-out to that single source
    let companies: Vec<Company> = match filter.company {
        Some(company) => vec![company],
        None => Company::ALL.to_vec(),
    };

    let requests = companies.iter().map(|&company| {
        let backend = state.backend.clone();
        async move { (company, backend.top_products(company, filter).await) }
    });

    let settled = join_all(requests).await;

    let mut updates: Vec<ProductPatch> = Vec::new();
    for (company, outcome) in settled {
        match outcome {
            Ok(batch) => {
                tracing::debug!("source {} returned {} records", company, batch.len());
                updates.extend(batch);
            }
            Err(e) => {
                tracing::warn!("source {} failed, skipping: {}", company, e);
            }
        }
    }

    let merged = overlay(&state.seed, &updates);
    if !state.view.commit(generation, merged) {
        tracing::debug!("discarding superseded refresh (generation {})", generation);
    }
}
