use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::catalog::Catalog;

/// Maximum number of items returned per prediction.
pub const DEFAULT_PREDICTION_LIMIT: usize = 3;

/// Catalog items not present in the purchase history.
///
/// History entries that match no catalog item are ignored; duplicates in the
/// history are harmless. Matching is exact string equality.
pub fn eligible_items<'a>(catalog: &'a Catalog, history: &[String]) -> Vec<&'a str> {
    let purchased: HashSet<&str> = history.iter().map(String::as_str).collect();
    catalog
        .items()
        .iter()
        .map(String::as_str)
        .filter(|item| !purchased.contains(item))
        .collect()
}

/// Selects a uniformly random subset of the eligible catalog items.
///
/// Returns min(`limit`, |eligible|) items, sampled without replacement, in no
/// guaranteed order. Total over its inputs: an empty catalog or a history
/// covering the whole catalog yields an empty selection.
pub fn select_predictions<R>(
    catalog: &Catalog,
    history: &[String],
    limit: usize,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let eligible = eligible_items(catalog, history);
    eligible
        .choose_multiple(rng, limit)
        .map(|item| (*item).to_string())
        .collect()
}
