//! # OxiNEAT-Decoder
//! Decodes a NEAT genome into an evaluation-ready neural network.
//!
//! A genome is a declarative list of neurons (each with an id and a
//! [`NeuronRole`]) and weighted connections between them. Decoding turns it
//! into a [`Network`] whose neurons are ranked by depth, so that a single
//! forward pass per [`predict`] call evaluates the whole net.
//!
//! Activation functions are not global state: they are carried by the
//! [`DecoderConfig`] passed to [`Network::new`].
//!
//! [`NeuronRole`]: crate::genomics::NeuronRole
//! [`Network`]: crate::networks::Network
//! [`Network::new`]: crate::networks::Network::new
//! [`predict`]: crate::networks::Network::predict
//! [`DecoderConfig`]: crate::networks::DecoderConfig
//!
//! # Example usage: hand-wired XOR
//! ```
//! use oxineat_decoder::genomics::{Genome, NeuronRole};
//! use oxineat_decoder::networks::{ActivationType, DecoderConfig, Network};
//!
//! fn main() -> Result<(), oxineat_decoder::NetworkError> {
//!     let mut genome = Genome::new();
//!     genome.add_neuron(0, NeuronRole::Input);
//!     genome.add_neuron(1, NeuronRole::Input);
//!     genome.add_neuron(2, NeuronRole::Bias);
//!     genome.add_neuron(3, NeuronRole::Output);
//!     genome.add_neuron(4, NeuronRole::Hidden); // OR
//!     genome.add_neuron(5, NeuronRole::Hidden); // AND
//!
//!     genome.add_connection(0, 4, 1.0);
//!     genome.add_connection(1, 4, 1.0);
//!     genome.add_connection(2, 4, -0.5);
//!     genome.add_connection(0, 5, 1.0);
//!     genome.add_connection(1, 5, 1.0);
//!     genome.add_connection(2, 5, -1.5);
//!     genome.add_connection(4, 3, 1.0);
//!     genome.add_connection(5, 3, -2.0);
//!
//!     let step = |x: f32| -> f32 { if x > 0.0 { 1.0 } else { 0.0 } };
//!     let mut network = Network::new(&genome, &DecoderConfig::new(step, step))?;
//!
//!     assert_eq!(network.predict(&[0.0, 0.0])?, vec![0.0]);
//!     assert_eq!(network.predict(&[0.0, 1.0])?, vec![1.0]);
//!     assert_eq!(network.predict(&[1.0, 0.0])?, vec![1.0]);
//!     assert_eq!(network.predict(&[1.0, 1.0])?, vec![0.0]);
//!
//!     // Built-in activation types work the same way.
//!     let config = DecoderConfig::new(ActivationType::Sigmoid, ActivationType::Sigmoid);
//!     let mut network = Network::new(&genome, &config)?;
//!     assert_eq!(network.predict(&[1.0, 1.0])?.len(), 1);
//!     Ok(())
//! }
//! ```

mod errors;
pub mod genomics;
pub mod networks;

pub use errors::NetworkError;

/// Identifier of a neuron, copied verbatim from
/// the genome into the decoded network.
pub type NeuronId = usize;

/// Result type returned by decoding and evaluation.
pub type Result<T> = std::result::Result<T, NetworkError>;
