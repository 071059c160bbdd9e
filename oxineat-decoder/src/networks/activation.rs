use serde::{Deserialize, Serialize};

/// A numeric transform applied to a neuron's
/// summed input to produce its output.
///
/// Implemented by [`ActivationType`] and by any
/// `Fn(f32) -> f32`, so closures can be used directly.
///
/// # Examples
/// ```
/// use oxineat_decoder::networks::{Activation, ActivationType};
///
/// let double = |x: f32| 2.0 * x;
///
/// assert_eq!(double.activate(1.5), 3.0);
/// assert_eq!(ActivationType::ReLU.activate(-1.0), 0.0);
/// ```
pub trait Activation {
    /// Returns the activation level for the passed input sum.
    fn activate(&self, input_sum: f32) -> f32;
}

/// An ActivationType represents one of
/// the built-in activation functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ActivationType {
    // 1 / (1 + exp(-4.9x))
    Sigmoid,
    // x
    Identity,
    // 0   if x < 0
    // x   if x ≥ 0
    ReLU,
    // exp(-x²)
    Gaussian,
    // sin(πx)
    Sinusoidal,
}

impl Activation for ActivationType {
    fn activate(&self, input_sum: f32) -> f32 {
        match self {
            ActivationType::Sigmoid => 1.0 / (1.0 + (-4.9 * input_sum).exp()),
            ActivationType::Identity => input_sum,
            ActivationType::ReLU => input_sum.max(0.0),
            ActivationType::Gaussian => (-input_sum.powf(2.0)).exp(),
            ActivationType::Sinusoidal => (input_sum * std::f32::consts::PI).sin(),
        }
    }
}

impl<F> Activation for F
where
    F: Fn(f32) -> f32,
{
    fn activate(&self, input_sum: f32) -> f32 {
        self(input_sum)
    }
}
