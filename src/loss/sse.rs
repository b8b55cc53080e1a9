pub struct SseLoss;

impl SseLoss {
    /// Sum of squared errors over one output vector:
    ///   `Σ (expected[i] - predicted[i])²`
    ///
    /// A sum, not a mean; the trainer accumulates it across every row of
    /// an epoch and reports the epoch total.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2))
            .sum()
    }
}
