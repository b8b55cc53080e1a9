/// Share of predictions matching the ground truth, as a percentage in
/// `[0, 100]`.
///
/// # Panics
/// Panics if the two lists differ in length.
pub fn accuracy_metric(actual: &[usize], predicted: &[usize]) -> f64 {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "actual and predicted must have equal length"
    );
    let correct = actual.iter().zip(predicted.iter())
        .filter(|(a, p)| a == p)
        .count();
    correct as f64 / actual.len() as f64 * 100.0
}

/// Mean of a list of per-fold accuracy percentages.
pub fn mean_accuracy(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}
