use std::fmt;

/// Outgoing weighted edge of a decoded neuron.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    /// Arena index of the target neuron.
    pub target: usize,
    pub weight: f32,
}

impl Edge {
    /// Creates a new Edge with the specified
    /// target neuron and weight.
    pub fn new(target: usize, weight: f32) -> Edge {
        Edge { target, weight }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.9}", self.target, self.weight)
    }
}
