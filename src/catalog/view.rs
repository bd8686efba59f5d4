use std::sync::{Arc, RwLock};

use crate::models::Product;

/// Shared catalog view state: the latest merged product list, the loading
/// flag, and the generation of the most recent refresh. A refresh that was
/// superseded before completing commits nothing.
#[derive(Clone)]
pub struct CatalogView {
    inner: Arc<RwLock<ViewState>>,
}

struct ViewState {
    products: Vec<Product>,
    loading: bool,
    generation: u64,
}

impl CatalogView {
    pub fn new(seed: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ViewState {
                products: seed,
                loading: false,
                generation: 0,
            })),
        }
    }

    /// Marks a refresh as in flight and returns its generation token.
    pub fn begin_refresh(&self) -> u64 {
        let mut state = self.inner.write().unwrap();
        state.generation += 1;
        state.loading = true;
        state.generation
    }

    /// Commits a merged list if `generation` is still the newest refresh.
    /// Returns false for a stale batch, which is discarded without touching
    /// the view or the loading flag.
    pub fn commit(&self, generation: u64, merged: Vec<Product>) -> bool {
        let mut state = self.inner.write().unwrap();
        if generation != state.generation {
            return false;
        }
        state.products = merged;
        state.loading = false;
        true
    }

    pub fn snapshot(&self) -> (Vec<Product>, bool) {
        let state = self.inner.read().unwrap();
        (state.products.clone(), state.loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::baseline;

    #[test]
    fn starts_with_the_seed_and_not_loading() {
        let view = CatalogView::new(baseline());
        let (products, loading) = view.snapshot();
        assert_eq!(products, baseline());
        assert!(!loading);
    }

    #[test]
    fn loading_flag_tracks_the_refresh_lifecycle() {
        let view = CatalogView::new(baseline());

        let generation = view.begin_refresh();
        assert!(view.snapshot().1);

        assert!(view.commit(generation, Vec::new()));
        assert!(!view.snapshot().1);
    }

    #[test]
    fn stale_refresh_is_discarded() {
        let view = CatalogView::new(baseline());
        let mut updated = baseline();
        updated[0].rating = 1;

        let stale = view.begin_refresh();
        let current = view.begin_refresh();

        assert!(!view.commit(stale, updated));
        // the stale batch must not clear the newer refresh's loading flag
        assert!(view.snapshot().1);
        assert_eq!(view.snapshot().0, baseline());

        let mut newest = baseline();
        newest[0].rating = 5;
        assert!(view.commit(current, newest.clone()));
        assert_eq!(view.snapshot().0, newest);
        assert!(!view.snapshot().1);
    }
}
