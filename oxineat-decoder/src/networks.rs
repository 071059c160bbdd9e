//! A Network is the decoded phenotype of a genome:
//! neurons become entries of a single arena, and
//! unsuppressed connections become weighted edges
//! owned by their source neuron.
//!
//! Each neuron is ranked by depth at decode time, and
//! every call to [`Network::predict`] evaluates the whole
//! network in a single pass in depth order.
mod activation;
mod config;
mod depth;
mod edge;

pub use activation::{Activation, ActivationType};
pub use config::DecoderConfig;

use crate::genomics::{NetworkGenome, NeuronRole};
use crate::{NetworkError, NeuronId, Result};
use edge::Edge;

use ahash::RandomState;
use tracing::{debug, trace, warn};

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;

/// A neural network decoded from a genome,
/// evaluated by a single depth-ordered forward pass.
///
/// Neurons are stored in genome declaration order, with
/// per-neuron data kept in parallel arrays indexed by
/// arena position.
#[derive(Clone, Debug)]
pub struct Network<A = ActivationType> {
    neuron_ids: Box<[NeuronId]>,
    roles: Box<[NeuronRole]>,
    depths: Box<[usize]>,
    input_sums: Box<[f32]>,
    activation_levels: Box<[f32]>,
    edges: Box<[Box<[Edge]>]>,
    /// All neurons, by ascending depth.
    evaluation_order: Box<[usize]>,
    /// Input and bias neurons, in declaration order. The last one is the bias.
    inputs: Box<[usize]>,
    /// Hidden neurons, by ascending depth.
    hidden: Box<[usize]>,
    /// Output neurons, by ascending depth.
    output_activation_order: Box<[usize]>,
    /// Output neurons, in declaration order.
    outputs: Box<[usize]>,
    order_violations: usize,
    hidden_activation: A,
    output_activation: A,
}

impl<A: Activation + Clone> Network<A> {
    /// Decodes the passed genome into a new network,
    /// using the activation functions in `config`.
    ///
    /// # Errors
    /// Returns [`DuplicateNeuronId`] if two neurons share an id,
    /// [`UnknownNeuronId`] if an unsuppressed connection references
    /// an id absent from the genome, and [`MissingBiasInvariant`]
    /// if the last input-role neuron is not a bias neuron (or there
    /// are no input-role neurons at all).
    ///
    /// [`DuplicateNeuronId`]: NetworkError::DuplicateNeuronId
    /// [`UnknownNeuronId`]: NetworkError::UnknownNeuronId
    /// [`MissingBiasInvariant`]: NetworkError::MissingBiasInvariant
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::Genome;
    /// use oxineat_decoder::networks::{DecoderConfig, Network};
    /// use oxineat_decoder::NetworkError;
    ///
    /// let mut genome = Genome::minimal(3, 2);
    /// genome.add_connection(0, 4, 1.0);
    /// let network = Network::new(&genome, &DecoderConfig::default()).unwrap();
    /// assert_eq!(network.input_count(), 3);
    /// assert_eq!(network.output_count(), 2);
    ///
    /// genome.add_connection(0, 42, 1.0);
    /// assert_eq!(
    ///     Network::new(&genome, &DecoderConfig::default()).unwrap_err(),
    ///     NetworkError::UnknownNeuronId(42),
    /// );
    /// ```
    pub fn new<G>(genome: &G, config: &DecoderConfig<A>) -> Result<Network<A>>
    where
        G: NetworkGenome + ?Sized,
    {
        let neurons = genome.neurons();
        let neuron_count = neurons.len();

        let mut index_from_id: HashMap<NeuronId, usize, RandomState> =
            HashMap::with_capacity_and_hasher(neuron_count, RandomState::new());
        let mut inputs = vec![];
        let mut outputs = vec![];
        for (index, neuron) in neurons.iter().enumerate() {
            match index_from_id.entry(neuron.id()) {
                Entry::Occupied(_) => return Err(NetworkError::DuplicateNeuronId(neuron.id())),
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
            match neuron.role() {
                NeuronRole::Input | NeuronRole::Bias => inputs.push(index),
                NeuronRole::Output => outputs.push(index),
                NeuronRole::Hidden => {}
            }
        }

        let mut edges = vec![vec![]; neuron_count];
        for connection in genome.connections().iter().filter(|c| !c.suppressed()) {
            let resolve = |id: NeuronId| {
                index_from_id
                    .get(&id)
                    .copied()
                    .ok_or(NetworkError::UnknownNeuronId(id))
            };
            let source = resolve(connection.from())?;
            let target = resolve(connection.to())?;
            edges[source].push(Edge::new(target, connection.weight()));
        }
        let edges: Box<[Box<[Edge]>]> = edges.into_iter().map(|v| v.into()).collect();

        match inputs.last() {
            Some(&bias) if neurons[bias].role() == NeuronRole::Bias => {}
            _ => return Err(NetworkError::MissingBiasInvariant),
        }

        let depths = depth::assign_depths(&edges, &inputs);
        let order_violations = depth::count_order_violations(&edges, &depths);

        // Stable, so equal depths keep declaration order.
        let mut evaluation_order: Vec<usize> = (0..neuron_count).collect();
        evaluation_order.sort_by_key(|&i| depths[i]);
        let by_role = |role: NeuronRole| {
            evaluation_order
                .iter()
                .copied()
                .filter(|&i| neurons[i].role() == role)
                .collect::<Box<[usize]>>()
        };
        let hidden = by_role(NeuronRole::Hidden);
        let output_activation_order = by_role(NeuronRole::Output);

        let network = Network {
            neuron_ids: neurons.iter().map(|n| n.id()).collect(),
            roles: neurons.iter().map(|n| n.role()).collect(),
            depths,
            input_sums: vec![0.0; neuron_count].into(),
            activation_levels: vec![0.0; neuron_count].into(),
            edges,
            evaluation_order: evaluation_order.into(),
            inputs: inputs.into(),
            hidden,
            output_activation_order,
            outputs: outputs.into(),
            order_violations,
            hidden_activation: config.hidden_activation.clone(),
            output_activation: config.output_activation.clone(),
        };

        debug!(
            neurons = neuron_count,
            inputs = network.input_count(),
            hidden = network.hidden.len(),
            outputs = network.output_count(),
            max_depth = network.depths.iter().copied().max().unwrap_or(0),
            "decoded network"
        );
        if order_violations > 0 {
            warn!(
                order_violations,
                "depth order does not precede every connection; genome may be recurrent"
            );
        }

        Ok(network)
    }

    /// Evaluates the network on `state`, one value per
    /// input neuron (excluding the bias), and returns the
    /// output neurons' values in declaration order.
    ///
    /// All neuron state is cleared before evaluation, so
    /// repeated calls with the same input yield the same output.
    ///
    /// # Errors
    /// Returns [`InvalidInputLength`] if `state`'s length differs
    /// from [`input_count`].
    ///
    /// [`InvalidInputLength`]: NetworkError::InvalidInputLength
    /// [`input_count`]: Network::input_count
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::Genome;
    /// use oxineat_decoder::networks::{ActivationType, DecoderConfig, Network};
    ///
    /// let mut genome = Genome::minimal(2, 1);
    /// genome.add_connection(0, 3, 2.5);
    /// genome.add_connection(1, 3, -2.5);
    /// genome.add_connection(2, 3, 0.5); // Bias
    ///
    /// let config = DecoderConfig::new(ActivationType::Sigmoid, ActivationType::ReLU);
    /// let mut network = Network::new(&genome, &config).unwrap();
    ///
    /// assert_eq!(network.predict(&[1.0, 0.5]).unwrap(), vec![1.75]);
    /// assert_eq!(network.predict(&[0.0, 1.0]).unwrap(), vec![0.0]);
    /// assert!(network.predict(&[1.0]).is_err());
    /// ```
    pub fn predict(&mut self, state: &[f32]) -> Result<Vec<f32>> {
        let expected = self.input_count();
        if state.len() != expected {
            return Err(NetworkError::InvalidInputLength {
                expected,
                found: state.len(),
            });
        }
        trace!(?state, "predict");

        self.clear_state();
        for (i, &value) in state.iter().enumerate() {
            let neuron = self.inputs[i];
            self.input_sums[neuron] += value;
            self.activate(neuron);
        }
        self.activate(self.inputs[expected]);
        for i in 0..self.hidden.len() {
            self.activate(self.hidden[i]);
        }
        for i in 0..self.output_activation_order.len() {
            self.activate(self.output_activation_order[i]);
        }

        Ok(self.outputs.iter().map(|&i| self.activation_levels[i]).collect())
    }

    /// Consumes a neuron's input sum, computes its activation
    /// level, and propagates it through all outgoing edges.
    fn activate(&mut self, neuron: usize) {
        let input_sum = std::mem::take(&mut self.input_sums[neuron]);
        let activation = match self.roles[neuron] {
            NeuronRole::Input => input_sum,
            NeuronRole::Bias => 1.0,
            NeuronRole::Output => self.output_activation.activate(input_sum),
            NeuronRole::Hidden => self.hidden_activation.activate(input_sum),
        };
        self.activation_levels[neuron] = activation;
        for edge in self.edges[neuron].iter() {
            self.input_sums[edge.target] += activation * edge.weight;
        }
    }
}

impl<A> Network<A> {
    /// Clears the input sums and activation levels of all neurons.
    fn clear_state(&mut self) {
        for (input_sum, activation) in self
            .input_sums
            .iter_mut()
            .zip(self.activation_levels.iter_mut())
        {
            *input_sum = 0.0;
            *activation = 0.0;
        }
    }

    /// Returns the number of values [`predict`] expects:
    /// the number of input neurons, excluding the bias.
    ///
    /// [`predict`]: Network::predict
    pub fn input_count(&self) -> usize {
        self.inputs.len() - 1
    }

    /// Returns the number of values [`predict`] returns.
    ///
    /// [`predict`]: Network::predict
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Returns the total number of neurons in the network.
    pub fn neuron_count(&self) -> usize {
        self.neuron_ids.len()
    }

    /// Returns the depth assigned to the neuron with the passed id,
    /// or `None` if the network has no such neuron.
    ///
    /// # Examples
    /// ```
    /// use oxineat_decoder::genomics::{Genome, NeuronRole};
    /// use oxineat_decoder::networks::{DecoderConfig, Network};
    ///
    /// let mut genome = Genome::minimal(1, 1);
    /// genome.add_neuron(3, NeuronRole::Hidden);
    /// genome.add_connection(0, 3, 1.0);
    /// genome.add_connection(3, 2, 1.0);
    ///
    /// let network = Network::new(&genome, &DecoderConfig::default()).unwrap();
    /// assert_eq!(network.depth_of(0), Some(0));
    /// assert_eq!(network.depth_of(3), Some(1));
    /// assert_eq!(network.depth_of(2), Some(2));
    /// assert_eq!(network.depth_of(9), None);
    /// ```
    pub fn depth_of(&self, id: NeuronId) -> Option<usize> {
        self.neuron_ids
            .iter()
            .position(|&n| n == id)
            .map(|i| self.depths[i])
    }

    /// Returns the ids of all neurons, by ascending depth.
    /// Neurons of equal depth keep their declaration order.
    pub fn evaluation_order(&self) -> impl Iterator<Item = NeuronId> + '_ {
        self.evaluation_order.iter().map(|&i| self.neuron_ids[i])
    }

    /// Returns the number of connections whose source neuron
    /// is not ranked strictly before its target. Single-pass
    /// evaluation is exact only when this is 0.
    pub fn order_violations(&self) -> usize {
        self.order_violations
    }
}

impl<A> fmt::Display for Network<A> {
    /// Writes one line per neuron, in evaluation order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &i in self.evaluation_order.iter() {
            write!(
                f,
                "{} [{:?}, depth {}] ->",
                self.neuron_ids[i], self.roles[i], self.depths[i]
            )?;
            for edge in self.edges[i].iter() {
                write!(
                    f,
                    " {} ({:.2}, depth {})",
                    self.neuron_ids[edge.target], edge.weight, self.depths[edge.target]
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genomics::Genome;

    use rand::{thread_rng, Rng};

    fn sigmoid(x: f32) -> f32 {
        1.0 / (1.0 + (-4.9 * x).exp())
    }

    fn identity() -> DecoderConfig {
        DecoderConfig::new(ActivationType::Identity, ActivationType::Identity)
    }

    /// Fully-connected layered genome with random weights.
    /// Every path from an input to a neuron has the same length.
    fn layered_genome(layers: &[usize]) -> Genome {
        let mut rng = thread_rng();
        let (input_count, output_count) = (layers[0], layers[layers.len() - 1]);
        let mut genome = Genome::minimal(input_count, output_count);
        let mut previous: Vec<NeuronId> = (0..=input_count).collect();
        let mut next_id = input_count + output_count + 1;
        for &width in &layers[1..layers.len() - 1] {
            let layer: Vec<_> = (next_id..next_id + width).collect();
            next_id += width;
            for &id in &layer {
                genome.add_neuron(id, NeuronRole::Hidden);
                for &from in &previous {
                    genome.add_connection(from, id, rng.gen_range(-2.0..2.0));
                }
            }
            previous = layer;
            previous.push(input_count); // Bias feeds every layer.
        }
        for id in input_count + 1..=input_count + output_count {
            for &from in &previous {
                genome.add_connection(from, id, rng.gen_range(-2.0..2.0));
            }
        }
        genome
    }

    #[test]
    fn new() {
        let mut genome = Genome::new();
        genome.add_neuron(10, NeuronRole::Output);
        genome.add_neuron(3, NeuronRole::Input);
        genome.add_neuron(7, NeuronRole::Hidden);
        genome.add_neuron(11, NeuronRole::Output);
        genome.add_neuron(1, NeuronRole::Input);
        genome.add_neuron(0, NeuronRole::Bias);
        genome.add_connection(3, 7, 1.0);
        genome.add_connection(7, 10, -1.0);
        genome.add_connection(1, 11, 0.5);
        genome.add_connection(0, 11, 2.0);
        // Suppressed connections aren't expressed, nor resolved.
        genome.add_connection(3, 99, 1.0).set_suppressed(true);

        let network = Network::new(&genome, &DecoderConfig::default()).unwrap();
        dbg!(&network);
        assert_eq!(network.input_count(), 2);
        assert_eq!(network.output_count(), 2);
        assert_eq!(network.neuron_count(), 6);
        assert_eq!(&*network.inputs, &[1, 4, 5]);
        assert_eq!(&*network.outputs, &[0, 3]);
        assert_eq!(&*network.hidden, &[2]);
        assert_eq!(&*network.edges[1], &[Edge::new(2, 1.0)]);
        assert_eq!(&*network.edges[2], &[Edge::new(0, -1.0)]);
        assert_eq!(&*network.edges[5], &[Edge::new(3, 2.0)]);
        assert_eq!(
            network.evaluation_order().collect::<Vec<_>>(),
            [3, 1, 0, 7, 11, 10]
        );
        assert_eq!(network.order_violations(), 0);
    }

    #[test]
    fn unknown_neuron_id() {
        let mut genome = Genome::minimal(1, 1);
        genome.add_connection(5, 2, 1.0);
        assert_eq!(
            Network::new(&genome, &identity()).unwrap_err(),
            NetworkError::UnknownNeuronId(5)
        );

        let mut genome = Genome::minimal(1, 1);
        genome.add_connection(0, 8, 1.0);
        assert_eq!(
            Network::new(&genome, &identity()).unwrap_err(),
            NetworkError::UnknownNeuronId(8)
        );
    }

    #[test]
    fn duplicate_neuron_id() {
        let mut genome = Genome::minimal(1, 1);
        genome.add_neuron(2, NeuronRole::Hidden);
        assert_eq!(
            Network::new(&genome, &identity()).unwrap_err(),
            NetworkError::DuplicateNeuronId(2)
        );
    }

    #[test]
    fn missing_bias() {
        let mut genome = Genome::new();
        genome.add_neuron(0, NeuronRole::Bias);
        genome.add_neuron(1, NeuronRole::Input);
        genome.add_neuron(2, NeuronRole::Output);
        assert_eq!(
            Network::new(&genome, &identity()).unwrap_err(),
            NetworkError::MissingBiasInvariant
        );

        let mut genome = Genome::new();
        genome.add_neuron(0, NeuronRole::Input);
        genome.add_neuron(1, NeuronRole::Output);
        assert_eq!(
            Network::new(&genome, &identity()).unwrap_err(),
            NetworkError::MissingBiasInvariant
        );

        let mut genome = Genome::new();
        genome.add_neuron(0, NeuronRole::Output);
        assert_eq!(
            Network::new(&genome, &identity()).unwrap_err(),
            NetworkError::MissingBiasInvariant
        );
    }

    #[test]
    fn bias_only() {
        let mut genome = Genome::minimal(0, 1);
        genome.add_connection(0, 1, -3.0);
        let mut network = Network::new(&genome, &identity()).unwrap();
        assert_eq!(network.input_count(), 0);
        assert_eq!(network.predict(&[]).unwrap(), vec![-3.0]);
    }

    #[test]
    fn linear_passthrough() {
        for weight in [-2.5, -1.0, 0.0, 0.75, 3.0] {
            let mut genome = Genome::minimal(1, 1);
            genome.add_connection(0, 2, weight);
            let mut network = Network::new(&genome, &identity()).unwrap();
            for x in -20..=20 {
                let x = x as f32 / 10.0;
                assert_eq!(network.predict(&[x]).unwrap(), vec![weight * x]);
            }
        }
    }

    #[test]
    fn bias_output_is_always_one() {
        let mut genome = Genome::minimal(2, 1);
        genome.add_connection(0, 2, 100.0); // Input into the bias.
        genome.add_connection(2, 3, 1.0);
        let mut network = Network::new(&genome, &identity()).unwrap();
        for (x, y) in [(0.0, 0.0), (5.0, -3.0), (-1e6, 1e6)] {
            assert_eq!(network.predict(&[x, y]).unwrap(), vec![1.0]);
            assert_eq!(network.activation_levels[2], 1.0);
        }
    }

    #[test]
    fn unconnected_outputs() {
        let mut network = Network::new(&Genome::minimal(2, 2), &DecoderConfig::default()).unwrap();
        assert_eq!(
            network.predict(&[1.0, -1.0]).unwrap(),
            vec![sigmoid(0.0), sigmoid(0.0)]
        );
    }

    #[test]
    fn hidden_chain() {
        let mut genome = Genome::minimal(1, 1);
        genome.add_neuron(3, NeuronRole::Hidden);
        genome.add_neuron(4, NeuronRole::Hidden);
        // Declared out of depth order.
        genome.add_connection(4, 2, 1.0);
        genome.add_connection(3, 4, 1.0);
        genome.add_connection(0, 3, 1.0);
        let mut network = Network::new(&genome, &DecoderConfig::default()).unwrap();
        for x in -20..=20 {
            let x = x as f32 / 10.0;
            assert_eq!(
                network.predict(&[x]).unwrap(),
                vec![sigmoid(sigmoid(sigmoid(x)))]
            );
        }
    }

    #[test]
    fn hidden_activated_by_depth_not_declaration() {
        let mut genome = Genome::minimal(1, 1);
        // Declared deepest-first.
        genome.add_neuron(5, NeuronRole::Hidden);
        genome.add_neuron(4, NeuronRole::Hidden);
        genome.add_neuron(3, NeuronRole::Hidden);
        genome.add_connection(0, 3, 2.0);
        genome.add_connection(3, 4, 2.0);
        genome.add_connection(4, 5, 2.0);
        genome.add_connection(5, 2, 2.0);
        let mut network = Network::new(&genome, &identity()).unwrap();
        assert_eq!(
            network.hidden.iter().map(|&i| network.neuron_ids[i]).collect::<Vec<_>>(),
            [3, 4, 5]
        );
        assert_eq!(network.predict(&[1.0]).unwrap(), vec![16.0]);
    }

    #[test]
    fn multiple_inputs() {
        let mut genome = Genome::minimal(3, 1);
        genome.add_connection(0, 4, -1.0);
        genome.add_connection(1, 4, 1.0);
        genome.add_connection(2, 4, 0.5);
        genome.add_connection(3, 4, 0.25);
        let mut network = Network::new(&genome, &DecoderConfig::default()).unwrap();
        for ((x, y), z) in (-20..=20).zip(-20..=20).zip(-20..=20) {
            let (x, y, z) = (x as f32 / 10.0, y as f32 / 10.0, z as f32 / 10.0);
            assert_eq!(
                network.predict(&[x, y, z]).unwrap(),
                vec![sigmoid(-x + y + 0.5 * z + 0.25)],
                "{} {} {}",
                x,
                y,
                z
            );
        }
    }

    #[test]
    fn outputs_in_declaration_order() {
        let mut genome = Genome::new();
        genome.add_neuron(0, NeuronRole::Input);
        genome.add_neuron(1, NeuronRole::Bias);
        genome.add_neuron(20, NeuronRole::Output);
        genome.add_neuron(10, NeuronRole::Output);
        genome.add_neuron(30, NeuronRole::Output);
        genome.add_neuron(5, NeuronRole::Hidden);
        genome.add_connection(0, 10, 1.0);
        genome.add_connection(0, 5, 1.0);
        genome.add_connection(5, 20, 2.0);
        genome.add_connection(1, 30, 3.0);
        let mut network = Network::new(&genome, &identity()).unwrap();
        assert_eq!(network.predict(&[1.5]).unwrap(), vec![3.0, 1.5, 3.0]);
    }

    #[test]
    fn invalid_input_length() {
        let mut network = Network::new(&Genome::minimal(2, 1), &identity()).unwrap();
        for state in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
            assert_eq!(
                network.predict(state).unwrap_err(),
                NetworkError::InvalidInputLength {
                    expected: 2,
                    found: state.len()
                }
            );
        }
    }

    #[test]
    fn custom_activations() {
        let mut genome = Genome::minimal(1, 1);
        genome.add_neuron(3, NeuronRole::Hidden);
        genome.add_connection(0, 3, 1.0);
        genome.add_connection(3, 2, 1.0);
        let scale = |x: f32| x * 10.0;
        let shift = |x: f32| x - 1.0;
        let config = DecoderConfig::new(
            &scale as &dyn Fn(f32) -> f32,
            &shift as &dyn Fn(f32) -> f32,
        );
        let mut network = Network::new(&genome, &config).unwrap();
        assert_eq!(network.predict(&[0.5]).unwrap(), vec![4.0]);
    }

    #[test]
    fn repeated_evaluation_is_idempotent() {
        let genome = layered_genome(&[3, 4, 4, 2]);
        let mut network = Network::new(&genome, &DecoderConfig::default()).unwrap();
        let state = [0.3, -1.2, 0.8];
        let first = network.predict(&state).unwrap();
        network.predict(&[5.0, 5.0, 5.0]).unwrap();
        for _ in 0..10 {
            assert_eq!(network.predict(&state).unwrap(), first);
        }
    }

    #[test]
    fn repeated_evaluation_is_idempotent_when_recurrent() {
        let mut genome = Genome::minimal(1, 1);
        genome.add_neuron(3, NeuronRole::Hidden);
        genome.add_connection(0, 3, 1.0);
        genome.add_connection(3, 2, 1.0);
        genome.add_connection(2, 3, -1.0); // Recurrent connection
        genome.add_connection(3, 3, 0.5); // Self loop
        let mut network = Network::new(&genome, &DecoderConfig::default()).unwrap();
        assert_eq!(network.order_violations(), 2);
        let first = network.predict(&[0.7]).unwrap();
        for _ in 0..10 {
            assert_eq!(network.predict(&[0.7]).unwrap(), first);
        }
        // Contributions arriving after activation are dropped.
        assert_eq!(first, vec![sigmoid(sigmoid(0.7))]);
    }

    #[test]
    fn decoding_is_deterministic() {
        let genome = layered_genome(&[4, 6, 3, 3]);
        let mut first = Network::new(&genome, &DecoderConfig::default()).unwrap();
        let mut second = Network::new(&genome, &DecoderConfig::default()).unwrap();
        assert_eq!(
            first.evaluation_order().collect::<Vec<_>>(),
            second.evaluation_order().collect::<Vec<_>>()
        );
        let mut rng = thread_rng();
        for _ in 0..100 {
            let state: Vec<f32> = (0..4).map(|_| rng.gen_range(-3.0..3.0)).collect();
            let (a, b) = (first.predict(&state).unwrap(), second.predict(&state).unwrap());
            assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
        }
    }

    #[test]
    fn depths_increase_along_layered_connections() {
        for layers in [&[2, 3, 1][..], &[3, 5, 5, 2][..], &[1, 1, 1, 1, 1][..], &[4, 2][..]] {
            let genome = layered_genome(layers);
            let network = Network::new(&genome, &DecoderConfig::default()).unwrap();
            assert_eq!(network.order_violations(), 0);
            for connection in genome.connections() {
                assert!(
                    network.depth_of(connection.from()) < network.depth_of(connection.to()),
                    "{}",
                    network
                );
            }
        }
    }

    #[test]
    fn layered_matches_manual_evaluation() {
        let genome = layered_genome(&[2, 3, 1]);
        let mut network = Network::new(&genome, &DecoderConfig::default()).unwrap();
        let weight = |from: NeuronId, to: NeuronId| {
            genome
                .connections()
                .iter()
                .find(|c| c.from() == from && c.to() == to)
                .map(|c| c.weight())
                .unwrap()
        };
        // Inputs 0, 1; bias 2; output 3; hidden 4, 5, 6.
        let (x, y) = (0.4, -0.9);
        let hidden: Vec<f32> = (4..7)
            .map(|h| sigmoid(x * weight(0, h) + y * weight(1, h) + weight(2, h)))
            .collect();
        let mut sum = 0.0;
        for (h, value) in (4..7).zip(&hidden) {
            sum += value * weight(h, 3);
        }
        sum += weight(2, 3);
        let output = network.predict(&[x, y]).unwrap()[0];
        assert!((output - sigmoid(sum)).abs() < 1e-6);
    }

    #[test]
    fn display() {
        let mut genome = Genome::minimal(1, 1);
        genome.add_connection(0, 2, 1.23456);
        let network = Network::new(&genome, &identity()).unwrap();
        assert_eq!(
            network.to_string(),
            "0 [Input, depth 0] -> 2 (1.23, depth 1)\n\
             1 [Bias, depth 0] ->\n\
             2 [Output, depth 1] ->\n"
        );
    }
}
