pub mod folds;
pub mod harness;
pub mod metrics;

pub use folds::cross_validation_split;
pub use harness::evaluate_algorithm;
pub use metrics::{accuracy_metric, mean_accuracy};
