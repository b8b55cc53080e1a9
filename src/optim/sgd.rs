use crate::network::network::Network;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one per-row SGD update to the network, using the deltas from
    /// the row's backward pass and the row's features as layer-0 inputs.
    pub fn step(&self, network: &mut Network, features: &[f64]) {
        network.update_weights(features, self.learning_rate);
    }
}
