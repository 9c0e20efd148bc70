use thiserror::Error;

/// The only condition the engine reports: a parameter of
/// [`LifeEngine::populate`](crate::LifeEngine::populate) is out of range.
///
/// Engines return it wrapped in [`anyhow::Error`]; use
/// `err.downcast_ref::<InvalidParameter>()` to inspect it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("density {0} is out of range [0.0, 1.0]")]
    Density(f64),
    #[error("height {value} is out of range [1, {max}]")]
    Height { value: usize, max: usize },
    #[error("width {value} is out of range [1, {max}]")]
    Width { value: usize, max: usize },
}
