use rand::Rng;

use crate::data::row::Row;
use crate::eval::folds::cross_validation_split;
use crate::eval::metrics::accuracy_metric;

/// Scores a training algorithm with k-fold cross-validation.
///
/// The dataset is split into `n_folds` folds; each fold in turn becomes
/// the test set while the remaining folds, flattened in fold order, form
/// the training set. Test rows are handed to the algorithm with their
/// labels blanked out; ground truth is kept aside for scoring. Returns one
/// accuracy percentage per fold, in fold order.
///
/// `algorithm` receives `(train_rows, unlabeled_test_rows, rng)` and must
/// return one predicted class per test row, in order. The generator used
/// for splitting is threaded through to the algorithm, so seeding it makes
/// the whole evaluation deterministic.
pub fn evaluate_algorithm<R, F>(
    dataset: &[Row],
    mut algorithm: F,
    n_folds: usize,
    rng: &mut R,
) -> Vec<f64>
where
    R: Rng,
    F: FnMut(&[Row], &[Row], &mut R) -> Vec<usize>,
{
    let folds = cross_validation_split(dataset, n_folds, rng);
    let mut scores = Vec::with_capacity(folds.len());

    for held_out in 0..folds.len() {
        let train_set: Vec<Row> = folds.iter().enumerate()
            .filter(|(i, _)| *i != held_out)
            .flat_map(|(_, fold)| fold.iter().cloned())
            .collect();
        let test_set: Vec<Row> = folds[held_out].iter().map(Row::unlabeled).collect();
        let actual: Vec<usize> = folds[held_out].iter()
            .map(|row| row.label.expect("dataset rows must carry a ground-truth label"))
            .collect();

        let predicted = algorithm(&train_set, &test_set, rng);
        scores.push(accuracy_metric(&actual, &predicted));
    }

    scores
}
