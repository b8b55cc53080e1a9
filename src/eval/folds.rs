use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::row::Row;

/// Partitions `dataset` into `n_folds` disjoint folds of
/// `floor(len / n_folds)` rows each.
///
/// Works on a shuffled permutation of the row indices sliced into chunks,
/// so the caller's dataset is borrowed immutably and never reordered.
/// Remainder rows (when the length is not divisible by `n_folds`) are
/// assigned to no fold, so `sum(fold sizes) <= dataset.len()`.
///
/// # Panics
/// Panics unless `2 <= n_folds <= dataset.len()`.
pub fn cross_validation_split<R: Rng>(
    dataset: &[Row],
    n_folds: usize,
    rng: &mut R,
) -> Vec<Vec<Row>> {
    assert!(n_folds >= 2, "n_folds must be at least 2");
    assert!(
        n_folds <= dataset.len(),
        "n_folds must not exceed the dataset length"
    );

    let fold_size = dataset.len() / n_folds;
    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    indices.shuffle(rng);

    indices.chunks_exact(fold_size)
        .take(n_folds)
        .map(|chunk| chunk.iter().map(|&i| dataset[i].clone()).collect())
        .collect()
}
