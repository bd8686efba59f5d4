use crate::models::{Product, ProductPatch};

/// Overlays partial upstream records onto the baseline catalog.
///
/// The output always has the same length and order as `seed`. Every patch
/// whose `id` matches a seed product overrides exactly the fields it carries;
/// patches with unknown ids are dropped. Patches are applied in the order
/// given, so when several sources return the same id, the last one in the
/// flattened (canonical source order) batch wins.
pub fn overlay(seed: &[Product], updates: &[ProductPatch]) -> Vec<Product> {
    seed.iter()
        .map(|product| {
            let mut merged = product.clone();
            for patch in updates.iter().filter(|u| u.id == product.id) {
                patch.apply(&mut merged);
            }
            merged
        })
        .collect()
}
