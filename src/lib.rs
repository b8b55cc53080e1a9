pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod eval;

// Convenience re-exports
pub use activation::activation::{sigmoid, transfer_derivative};
pub use layers::dense::{Layer, Neuron};
pub use network::network::Network;
pub use loss::sse::SseLoss;
pub use loss::regularization::Regularization;
pub use optim::sgd::Sgd;
pub use train::trainer::{back_propagation, train_network};
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::EpochStats;
pub use data::row::Row;
pub use data::synthetic::generate_dataset;
pub use eval::folds::cross_validation_split;
pub use eval::harness::evaluate_algorithm;
pub use eval::metrics::{accuracy_metric, mean_accuracy};
