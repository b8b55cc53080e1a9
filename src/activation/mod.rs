pub mod activation;

pub use activation::{sigmoid, transfer_derivative};
