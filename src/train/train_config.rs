use std::sync::mpsc;

use crate::loss::regularization::Regularization;
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_network` run.
///
/// # Fields
/// - `epochs`         — number of full passes over the training rows; the
///                      loop always runs all of them (no early stopping)
/// - `regularization` — weight penalty folded into the output-layer error
/// - `progress_tx`    — optional channel sender; one `EpochStats` is sent
///                      per completed epoch. A dropped receiver does not
///                      stop training.
pub struct TrainConfig {
    pub epochs: usize,
    pub regularization: Regularization,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel.
    pub fn new(epochs: usize, regularization: Regularization) -> Self {
        TrainConfig {
            epochs,
            regularization,
            progress_tx: None,
        }
    }
}
