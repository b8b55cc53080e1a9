use rand::Rng;

use crate::data::row::Row;

/// Generates a synthetic binary-classification dataset.
///
/// Each row has two features drawn uniformly from `[-1, 1)`; the class is
/// `0` when the features share a sign (their product is positive) and `1`
/// otherwise. A pair with a coordinate exactly on an axis is redrawn once;
/// the redrawn pair is not rechecked.
pub fn generate_dataset<R: Rng>(data_points: usize, rng: &mut R) -> Vec<Row> {
    (0..data_points)
        .map(|_| {
            let mut first = rng.gen_range(-1.0..1.0);
            let mut second = rng.gen_range(-1.0..1.0);

            if first == 0.0 || second == 0.0 {
                first = rng.gen_range(-1.0..1.0);
                second = rng.gen_range(-1.0..1.0);
            }

            let label = if first * second > 0.0 { 0 } else { 1 };
            Row::new(vec![first, second], label)
        })
        .collect()
}
