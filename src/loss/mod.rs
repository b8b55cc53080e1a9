pub mod sse;
pub mod regularization;

pub use sse::SseLoss;
pub use regularization::Regularization;
