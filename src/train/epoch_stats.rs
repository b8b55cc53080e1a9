use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_network`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the
/// training loop sends one `EpochStats` value at the end of every
/// completed epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Learning rate the epoch ran with.
    pub learning_rate: f64,
    /// Sum of squared errors accumulated over every row of this epoch.
    pub sum_squared_error: f64,
}
