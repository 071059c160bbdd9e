//! Genomes are the declarative descriptions from which
//! networks are decoded: an ordered list of neurons,
//! and an ordered list of weighted connections between them.
//!
//! Any genome representation can be decoded by implementing
//! the [`NetworkGenome`] trait. The [`Genome`] type is a plain
//! implementation, suitable for hand-built networks and tests.
mod genes;
mod nodes;

pub use genes::ConnectionGene;
pub use nodes::{NeuronGene, NeuronRole};

use crate::NeuronId;

use std::fmt;

/// An interface for genomes that can be decoded into networks.
///
/// Declaration order is significant: the decoded network's
/// inputs and outputs keep the order in which their neurons
/// appear in [`neurons`], and the last input-role neuron
/// must be the bias neuron.
///
/// [`neurons`]: NetworkGenome::neurons
pub trait NetworkGenome {
    /// Returns the genome's neurons, in declaration order.
    fn neurons(&self) -> &[NeuronGene];

    /// Returns the genome's connections, in declaration order.
    fn connections(&self) -> &[ConnectionGene];
}

/// A simple list-backed genome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Genome {
    neurons: Vec<NeuronGene>,
    connections: Vec<ConnectionGene>,
}

impl Genome {
    /// Returns an empty genome.
    pub fn new() -> Genome {
        Genome::default()
    }

    /// Returns a genome with `input_count` input neurons,
    /// a bias neuron and `output_count` output neurons, and
    /// no connections.
    ///
    /// Inputs receive ids `0..input_count`, the bias neuron
    /// has id `input_count`, and outputs follow.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::{Genome, NetworkGenome, NeuronRole};
    ///
    /// let genome = Genome::minimal(2, 1);
    ///
    /// assert_eq!(genome.neurons().len(), 4);
    /// assert_eq!(genome.neurons()[2].role(), NeuronRole::Bias);
    /// assert_eq!(genome.neurons()[3].id(), 3);
    /// ```
    pub fn minimal(input_count: usize, output_count: usize) -> Genome {
        let mut genome = Genome::new();
        for id in 0..input_count {
            genome.add_neuron(id, NeuronRole::Input);
        }
        genome.add_neuron(input_count, NeuronRole::Bias);
        for id in input_count + 1..=input_count + output_count {
            genome.add_neuron(id, NeuronRole::Output);
        }
        genome
    }

    /// Appends a neuron to the genome and returns a reference to it.
    ///
    /// Ids are not checked for uniqueness here; duplicates
    /// are rejected when the genome is decoded.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::{Genome, NetworkGenome, NeuronRole};
    ///
    /// let mut genome = Genome::new();
    /// genome.add_neuron(7, NeuronRole::Hidden);
    ///
    /// assert_eq!(genome.neurons()[0].id(), 7);
    /// ```
    pub fn add_neuron(&mut self, id: NeuronId, role: NeuronRole) -> &mut NeuronGene {
        let index = self.neurons.len();
        self.neurons.push(NeuronGene::new(id, role));
        &mut self.neurons[index]
    }

    /// Appends a connection to the genome and returns a reference to it.
    ///
    /// Endpoints are not checked here; connections to
    /// nonexistant neurons are rejected when the genome
    /// is decoded.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::{Genome, NetworkGenome};
    ///
    /// let mut genome = Genome::minimal(1, 1);
    /// genome.add_connection(0, 2, 1.5).set_suppressed(true);
    ///
    /// assert!(genome.connections()[0].suppressed());
    /// ```
    pub fn add_connection(&mut self, from: NeuronId, to: NeuronId, weight: f32) -> &mut ConnectionGene {
        let index = self.connections.len();
        self.connections.push(ConnectionGene::new(from, to, weight));
        &mut self.connections[index]
    }
}

impl NetworkGenome for Genome {
    fn neurons(&self) -> &[NeuronGene] {
        &self.neurons
    }

    fn connections(&self) -> &[ConnectionGene] {
        &self.connections
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Genome {{\n\tneurons: [{}]\n\tconnections: [{}]\n}}",
            self.neurons
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            self.connections
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
