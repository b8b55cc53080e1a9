use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::sigmoid;

/// A single neuron: one weight per input plus a trailing bias weight.
///
/// `output` holds the activation from the last forward pass and `delta` the
/// error signal from the last backward pass; both start at `0.0` and are
/// only meaningful after the corresponding pass has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub output: f64,
    pub delta: f64,
}

impl Neuron {
    /// Creates a neuron with `input_size + 1` weights (bias last), each
    /// drawn uniformly from `[0, 1)`.
    pub fn new<R: Rng>(input_size: usize, rng: &mut R) -> Neuron {
        let weights = (0..input_size + 1).map(|_| rng.gen::<f64>()).collect();
        Neuron { weights, output: 0.0, delta: 0.0 }
    }

    /// Weighted sum of the inputs plus the bias (the last weight).
    pub fn activate(&self, inputs: &[f64]) -> f64 {
        let bias = self.weights[self.weights.len() - 1];
        self.weights.iter().zip(inputs.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>() + bias
    }
}

/// An ordered row of neurons sharing the same input width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        let neurons = (0..size).map(|_| Neuron::new(input_size, rng)).collect();
        Layer { neurons }
    }

    /// Forward pass through this layer; stores each neuron's activation for
    /// the backward pass and returns the layer's outputs.
    pub fn feed_from(&mut self, inputs: &[f64]) -> Vec<f64> {
        self.neurons.iter_mut()
            .map(|neuron| {
                neuron.output = sigmoid(neuron.activate(inputs));
                neuron.output
            })
            .collect()
    }
}
