use crate::NeuronId;

/// An error type indicating that a genome could not
/// be decoded, or that a decoded network was evaluated
/// with malformed input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection references a neuron id absent from the genome.
    #[error("connection references nonexistant neuron with id {0}")]
    UnknownNeuronId(NeuronId),
    /// Two neurons in the genome share the same id.
    #[error("duplicate neuron declaration with id {0}")]
    DuplicateNeuronId(NeuronId),
    /// The last input neuron of the genome is not a bias neuron.
    #[error("last input neuron is not a bias neuron")]
    MissingBiasInvariant,
    /// The input vector's length does not match the network's input count.
    #[error("expected {expected} input values, got {found}")]
    InvalidInputLength { expected: usize, found: usize },
}
