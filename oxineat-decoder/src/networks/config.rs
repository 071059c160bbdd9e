use super::ActivationType;

use serde::{Deserialize, Serialize};

/// Configuration data for genome decoding.
///
/// Holds the activation handles shared by all
/// neurons of a decoded network: one for hidden
/// neurons and one for output neurons. Each network
/// keeps its own copy, so a configuration can be
/// reused for any number of decodes.
///
/// # Examples
/// ```
/// use oxineat_decoder::networks::{ActivationType, DecoderConfig};
///
/// let config = DecoderConfig {
///     output_activation: ActivationType::Identity,
///     ..DecoderConfig::default()
/// };
///
/// assert_eq!(config.hidden_activation, ActivationType::Sigmoid);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig<A = ActivationType> {
    /// Activation function of hidden neurons.
    pub hidden_activation: A,
    /// Activation function of output neurons.
    pub output_activation: A,
}

impl<A> DecoderConfig<A> {
    /// Returns a configuration with the specified activation handles.
    pub fn new(hidden_activation: A, output_activation: A) -> DecoderConfig<A> {
        DecoderConfig {
            hidden_activation,
            output_activation,
        }
    }
}

impl Default for DecoderConfig {
    /// Uses [`Sigmoid`] for both hidden and output neurons.
    ///
    /// [`Sigmoid`]: ActivationType::Sigmoid
    fn default() -> DecoderConfig {
        DecoderConfig::new(ActivationType::Sigmoid, ActivationType::Sigmoid)
    }
}
