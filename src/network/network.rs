use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::transfer_derivative;
use crate::layers::dense::Layer;
use crate::loss::regularization::Regularization;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network of the given layer widths. `layer_sizes` lists the
    /// neuron count of each layer in order; the first layer reads
    /// `n_inputs` features, every later layer reads the previous layer's
    /// outputs. All weights (biases included) start uniform in `[0, 1)`.
    pub fn new<R: Rng>(n_inputs: usize, layer_sizes: &[usize], rng: &mut R) -> Network {
        let mut input_size = n_inputs;
        let layers = layer_sizes.iter()
            .map(|&size| {
                let layer = Layer::new(size, input_size, rng);
                input_size = size;
                layer
            })
            .collect();
        Network { layers }
    }

    /// The classic two-layer form: one hidden layer, one output layer.
    pub fn initialize<R: Rng>(
        n_inputs: usize,
        n_hidden: usize,
        n_outputs: usize,
        rng: &mut R,
    ) -> Network {
        Network::new(n_inputs, &[n_hidden, n_outputs], rng)
    }

    /// Forward pass; stores activations in each neuron for backprop.
    /// Returns the output layer's activations.
    pub fn forward(&mut self, features: &[f64]) -> Vec<f64> {
        let mut inputs = features.to_vec();
        for layer in &mut self.layers {
            inputs = layer.feed_from(&inputs);
        }
        inputs
    }

    /// Backward pass over the layers in reverse order; must follow a
    /// forward pass on the same row.
    ///
    /// Output-layer error is `output - expected` plus the regularization
    /// penalty: one scalar computed over the whole network's weights and
    /// added to every output neuron alike. Hidden-layer error is the
    /// weighted sum of the next layer's deltas. Every neuron then stores
    /// `delta = error * output * (1 - output)`.
    pub fn backward(&mut self, expected: &[f64], regularization: Regularization) {
        let penalty = regularization.penalty(self);
        for i in (0..self.layers.len()).rev() {
            let errors: Vec<f64> = if i == self.layers.len() - 1 {
                self.layers[i].neurons.iter().zip(expected.iter())
                    .map(|(neuron, target)| neuron.output - target + penalty)
                    .collect()
            } else {
                let next = &self.layers[i + 1];
                (0..self.layers[i].neurons.len())
                    .map(|j| {
                        next.neurons.iter()
                            .map(|m| m.weights[j] * m.delta)
                            .sum()
                    })
                    .collect()
            };
            for (neuron, error) in self.layers[i].neurons.iter_mut().zip(errors) {
                neuron.delta = error * transfer_derivative(neuron.output);
            }
        }
    }

    /// Gradient-descent step using the deltas from the last backward pass.
    /// Layer 0 reads `features`; deeper layers read the previous layer's
    /// stored outputs. The trailing bias weight updates without an input
    /// multiplier.
    pub fn update_weights(&mut self, features: &[f64], learning_rate: f64) {
        for i in 0..self.layers.len() {
            let inputs: Vec<f64> = if i == 0 {
                features.to_vec()
            } else {
                self.layers[i - 1].neurons.iter().map(|n| n.output).collect()
            };
            for neuron in &mut self.layers[i].neurons {
                let delta = neuron.delta;
                for (weight, input) in neuron.weights.iter_mut().zip(inputs.iter()) {
                    *weight -= learning_rate * delta * input;
                }
                if let Some(bias) = neuron.weights.last_mut() {
                    *bias -= learning_rate * delta;
                }
            }
        }
    }

    /// Forward pass, then the predicted class: the index of the largest
    /// output, ties going to the lowest index.
    pub fn predict(&mut self, features: &[f64]) -> usize {
        let outputs = self.forward(features);
        argmax(&outputs)
    }

    /// Sum of `|w|` over every weight in the network, biases included.
    pub fn l1_norm(&self) -> f64 {
        self.weights().map(f64::abs).sum()
    }

    /// Sum of `w²` over every weight in the network, biases included
    /// (no square root).
    pub fn l2_norm(&self) -> f64 {
        self.weights().map(|w| w * w).sum()
    }

    fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.layers.iter()
            .flat_map(|layer| layer.neurons.iter())
            .flat_map(|neuron| neuron.weights.iter().copied())
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

/// Index of the maximum value; ties resolve to the lowest index.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::dense::Neuron;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_layer() -> Network {
        let mut rng = StdRng::seed_from_u64(7);
        Network::initialize(2, 4, 2, &mut rng)
    }

    #[test]
    fn test_initialize_shapes() {
        let network = two_layer();
        assert_eq!(network.layers.len(), 2);
        assert_eq!(network.layers[0].neurons.len(), 4);
        assert_eq!(network.layers[1].neurons.len(), 2);
        for neuron in &network.layers[0].neurons {
            assert_eq!(neuron.weights.len(), 3);
        }
        for neuron in &network.layers[1].neurons {
            assert_eq!(neuron.weights.len(), 5);
        }
    }

    #[test]
    fn test_new_arbitrary_depth() {
        let mut rng = StdRng::seed_from_u64(8);
        let network = Network::new(3, &[5, 4, 2], &mut rng);
        assert_eq!(network.layers.len(), 3);
        assert_eq!(network.layers[0].neurons[0].weights.len(), 4);
        assert_eq!(network.layers[1].neurons[0].weights.len(), 6);
        assert_eq!(network.layers[2].neurons[0].weights.len(), 5);
    }

    #[test]
    fn test_seeded_initialization_is_deterministic() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let na = Network::initialize(2, 4, 2, &mut a);
        let nb = Network::initialize(2, 4, 2, &mut b);
        for (la, lb) in na.layers.iter().zip(nb.layers.iter()) {
            for (x, y) in la.neurons.iter().zip(lb.neurons.iter()) {
                assert_eq!(x.weights, y.weights);
            }
        }
    }

    #[test]
    fn test_forward_output_length() {
        let mut network = two_layer();
        let outputs = network.forward(&[0.3, -0.8]);
        assert_eq!(outputs.len(), 2);
        assert!(outputs.iter().all(|o| *o > 0.0 && *o < 1.0));
    }

    #[test]
    fn test_backward_without_regularization() {
        let mut network = two_layer();
        let outputs = network.forward(&[0.3, -0.8]);
        let expected = vec![1.0, 0.0];
        network.backward(&expected, Regularization::None);
        for (j, neuron) in network.layers[1].neurons.iter().enumerate() {
            let error = outputs[j] - expected[j];
            let want = error * transfer_derivative(outputs[j]);
            assert!((neuron.delta - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_backward_hidden_deltas() {
        let mut network = two_layer();
        network.forward(&[0.3, -0.8]);
        network.backward(&[1.0, 0.0], Regularization::None);
        let hidden: Vec<Neuron> = network.layers[0].neurons.clone();
        let output: Vec<Neuron> = network.layers[1].neurons.clone();
        for (j, neuron) in hidden.iter().enumerate() {
            let error: f64 = output.iter().map(|m| m.weights[j] * m.delta).sum();
            let want = error * transfer_derivative(neuron.output);
            assert!((neuron.delta - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_l1_penalty_broadcast_across_output_neurons() {
        let mut network = two_layer();
        let outputs = network.forward(&[0.5, 0.5]);
        let penalty = Regularization::L1.penalty(&network);
        assert!(penalty > 0.0);
        let expected = vec![0.0, 1.0];
        network.backward(&expected, Regularization::L1);
        // Recover each output neuron's pre-derivative error; the penalty
        // share must be identical for all of them.
        for (j, neuron) in network.layers[1].neurons.iter().enumerate() {
            let error = neuron.delta / transfer_derivative(outputs[j]);
            let recovered = error - (outputs[j] - expected[j]);
            assert!((recovered - penalty).abs() < 1e-9);
        }
    }

    #[test]
    fn test_update_weights_follows_gradient_rule() {
        let mut network = two_layer();
        let features = [0.3, -0.8];
        network.forward(&features);
        network.backward(&[1.0, 0.0], Regularization::None);
        let before = network.clone();
        let l_rate = 0.5;
        network.update_weights(&features, l_rate);

        // Hidden layer reads the raw features.
        for (old, new) in before.layers[0].neurons.iter().zip(&network.layers[0].neurons) {
            for k in 0..features.len() {
                let want = old.weights[k] - l_rate * old.delta * features[k];
                assert!((new.weights[k] - want).abs() < 1e-12);
            }
            let bias = old.weights.len() - 1;
            let want = old.weights[bias] - l_rate * old.delta;
            assert!((new.weights[bias] - want).abs() < 1e-12);
        }

        // Output layer reads the hidden layer's stored outputs.
        let hidden_outputs: Vec<f64> =
            before.layers[0].neurons.iter().map(|n| n.output).collect();
        for (old, new) in before.layers[1].neurons.iter().zip(&network.layers[1].neurons) {
            for (k, input) in hidden_outputs.iter().enumerate() {
                let want = old.weights[k] - l_rate * old.delta * input;
                assert!((new.weights[k] - want).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_predict_tie_goes_to_lowest_index() {
        // Two identical output neurons produce identical outputs.
        let neuron = Neuron { weights: vec![0.4, 0.1], output: 0.0, delta: 0.0 };
        let mut network = Network {
            layers: vec![Layer { neurons: vec![neuron.clone(), neuron] }],
        };
        assert_eq!(network.predict(&[0.9]), 0);
    }

    #[test]
    fn test_weight_norms() {
        let neuron = Neuron { weights: vec![-2.0, 3.0], output: 0.0, delta: 0.0 };
        let network = Network {
            layers: vec![Layer { neurons: vec![neuron] }],
        };
        assert!((network.l1_norm() - 5.0).abs() < 1e-12);
        assert!((network.l2_norm() - 13.0).abs() < 1e-12);
    }
}
