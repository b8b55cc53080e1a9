use std::collections::HashSet;

use rand::Rng;

use crate::data::row::Row;
use crate::loss::sse::SseLoss;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` in place for exactly `config.epochs` epochs.
///
/// Each epoch visits every training row once, in order, performing
/// forward → backward → update per row (fully online SGD, no batching,
/// no shuffling). The epoch's sum of squared errors against the one-hot
/// expected vector is printed as
/// `epoch=<n>, lrate=<f>, error=<f>` and, when a progress channel is
/// configured, also sent as an `EpochStats`.
///
/// # Panics
/// Panics if `train` is empty, a row carries no label, or a label is not
/// below `n_outputs`.
pub fn train_network(
    network: &mut Network,
    train: &[Row],
    n_outputs: usize,
    optimizer: &Sgd,
    config: &TrainConfig,
) {
    assert!(!train.is_empty(), "train rows must not be empty");
    assert!(n_outputs > 0, "n_outputs must be at least 1");

    for epoch in 0..config.epochs {
        let mut sum_error = 0.0;

        for row in train {
            let outputs = network.forward(&row.features);

            let label = row.label.expect("training rows must carry a ground-truth label");
            assert!(
                label < n_outputs,
                "label {} out of range for {} outputs",
                label,
                n_outputs
            );
            let mut expected = vec![0.0; n_outputs];
            expected[label] = 1.0;

            sum_error += SseLoss::loss(&outputs, &expected);

            network.backward(&expected, config.regularization);
            optimizer.step(network, &row.features);
        }

        println!(
            "epoch={}, lrate={:.3}, error={:.3}",
            epoch, optimizer.learning_rate, sum_error
        );

        if let Some(ref tx) = config.progress_tx {
            // The epoch count is a hard contract; a vanished receiver must
            // not cut training short.
            let _ = tx.send(EpochStats {
                epoch,
                total_epochs: config.epochs,
                learning_rate: optimizer.learning_rate,
                sum_squared_error: sum_error,
            });
        }
    }
}

/// Backpropagation with stochastic gradient descent as a cross-validation
/// algorithm: builds a fresh two-layer network sized from the training
/// rows, trains it, and predicts a class for every test row in order.
///
/// `n_inputs` is the feature count of the first training row; `n_outputs`
/// is the number of distinct labels observed in the training set.
pub fn back_propagation<R: Rng>(
    train: &[Row],
    test: &[Row],
    n_hidden: usize,
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> Vec<usize> {
    assert!(!train.is_empty(), "train rows must not be empty");

    let n_inputs = train[0].features.len();
    let n_outputs = distinct_labels(train);

    let mut network = Network::initialize(n_inputs, n_hidden, n_outputs, rng);
    train_network(&mut network, train, n_outputs, optimizer, config);

    test.iter().map(|row| network.predict(&row.features)).collect()
}

fn distinct_labels(rows: &[Row]) -> usize {
    rows.iter()
        .filter_map(|row| row.label)
        .collect::<HashSet<_>>()
        .len()
}
