use serde::{Serialize, Deserialize};

use crate::network::network::Network;

/// L1 penalty coefficient.
pub const LAMBDA_L1: f64 = 0.001;
/// L2 penalty coefficient.
pub const LAMBDA_L2: f64 = 0.0001;

/// Selects the weight penalty folded into the output-layer error during
/// the backward pass.
///
/// The penalty is a single scalar over the *entire* network's weights
/// (biases included) and is added to every output neuron's error alike:
/// a global broadcast term, not a per-weight gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regularization {
    None,
    L1,
    L2,
}

impl Regularization {
    /// The penalty scalar for the network's current weights:
    /// `0` for `None`, `λ1 * Σ|w|` for `L1`, `λ2 * Σw²` for `L2`.
    pub fn penalty(&self, network: &Network) -> f64 {
        match self {
            Regularization::None => 0.0,
            Regularization::L1 => LAMBDA_L1 * network.l1_norm(),
            Regularization::L2 => LAMBDA_L2 * network.l2_norm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::dense::{Layer, Neuron};

    fn network_with_weights(weights: Vec<f64>) -> Network {
        let neuron = Neuron { weights, output: 0.0, delta: 0.0 };
        Network { layers: vec![Layer { neurons: vec![neuron] }] }
    }

    #[test]
    fn test_none_has_no_penalty() {
        let network = network_with_weights(vec![5.0, -3.0]);
        assert_eq!(Regularization::None.penalty(&network), 0.0);
    }

    #[test]
    fn test_l1_penalty() {
        let network = network_with_weights(vec![-1.5, 2.0, 0.5]);
        let penalty = Regularization::L1.penalty(&network);
        assert!((penalty - LAMBDA_L1 * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_l2_penalty() {
        let network = network_with_weights(vec![-1.0, 2.0]);
        let penalty = Regularization::L2.penalty(&network);
        assert!((penalty - LAMBDA_L2 * 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_penalty_monotone_in_weight_magnitude() {
        let small = network_with_weights(vec![0.1, 0.2]);
        let large = network_with_weights(vec![1.0, 2.0]);
        assert!(Regularization::L1.penalty(&small) < Regularization::L1.penalty(&large));
        assert!(Regularization::L2.penalty(&small) < Regularization::L2.penalty(&large));
    }
}
