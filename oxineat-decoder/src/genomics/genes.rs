use crate::NeuronId;

use std::fmt;

/// A weighted, directed connection between two
/// neurons of a genome. Unsuppressed connections
/// become edges in the genome's decoded network.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConnectionGene {
    from: NeuronId,
    to: NeuronId,
    weight: f32,
    suppressed: bool,
}

impl ConnectionGene {
    /// Returns a new _unsuppressed_ connection with the specified parameters.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::ConnectionGene;
    ///
    /// let connection = ConnectionGene::new(3, 9, 2.0);
    /// ```
    pub fn new(from: NeuronId, to: NeuronId, weight: f32) -> ConnectionGene {
        ConnectionGene {
            from,
            to,
            weight,
            suppressed: false,
        }
    }

    /// Returns the id of the connection's source neuron.
    pub fn from(&self) -> NeuronId {
        self.from
    }

    /// Returns the id of the connection's destination neuron.
    pub fn to(&self) -> NeuronId {
        self.to
    }

    /// Returns the connection's weight.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::ConnectionGene;
    ///
    /// let connection = ConnectionGene::new(3, 9, 2.0);
    ///
    /// assert_eq!(connection.weight(), 2.0);
    /// ```
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns whether the connection is suppressed.
    pub fn suppressed(&self) -> bool {
        self.suppressed
    }

    /// Sets the connection's suppression status.
    /// Suppressed connections are not expressed
    /// in decoded networks.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::ConnectionGene;
    ///
    /// let mut connection = ConnectionGene::new(3, 9, 2.0);
    /// connection.set_suppressed(true);
    ///
    /// assert!(connection.suppressed());
    /// ```
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }
}

impl fmt::Display for ConnectionGene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.9}){}",
            self.from,
            self.to,
            self.weight,
            if self.suppressed { " [suppressed]" } else { "" }
        )
    }
}
