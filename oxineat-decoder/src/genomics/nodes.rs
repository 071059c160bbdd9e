use crate::NeuronId;

use std::fmt;

/// A NeuronRole indicates the function of
/// a neuron in the decoded network, and thereby
/// how its activation is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeuronRole {
    /// Input neurons. Their output is the input value itself.
    Input,
    /// Bias neurons. Their output is always 1.
    Bias,
    /// Output neurons, using the output activation function.
    Output,
    /// Hidden neurons, using the hidden activation function.
    Hidden,
}

impl NeuronRole {
    /// Returns whether neurons of this role are placed
    /// in the network's input view.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::NeuronRole;
    ///
    /// assert!(NeuronRole::Input.is_input());
    /// assert!(NeuronRole::Bias.is_input());
    /// assert!(!NeuronRole::Hidden.is_input());
    /// ```
    pub fn is_input(self) -> bool {
        matches!(self, NeuronRole::Input | NeuronRole::Bias)
    }
}

/// Declaration of a single neuron in a genome.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NeuronGene {
    id: NeuronId,
    role: NeuronRole,
}

impl NeuronGene {
    /// Returns a new neuron declaration.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::{NeuronGene, NeuronRole};
    ///
    /// let neuron = NeuronGene::new(5, NeuronRole::Hidden);
    /// ```
    pub fn new(id: NeuronId, role: NeuronRole) -> NeuronGene {
        NeuronGene { id, role }
    }

    /// Returns the neuron's id.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::{NeuronGene, NeuronRole};
    ///
    /// let neuron = NeuronGene::new(5, NeuronRole::Hidden);
    ///
    /// assert_eq!(neuron.id(), 5);
    /// ```
    pub fn id(&self) -> NeuronId {
        self.id
    }

    /// Returns the neuron's role.
    pub fn role(&self) -> NeuronRole {
        self.role
    }
}

impl fmt::Display for NeuronGene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{:?}]", self.id, self.role)
    }
}
