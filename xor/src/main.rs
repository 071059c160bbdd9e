use oxineat_decoder::genomics::{Genome, NeuronRole};
use oxineat_decoder::networks::{DecoderConfig, Network};
use oxineat_decoder::NetworkError;

use rand::{thread_rng, Rng};
use rayon::prelude::*;
use tracing::{info, warn};

const ERROR_MARGIN: f32 = 0.3;

const CONFIG: &str = "(
    hidden_activation: Sigmoid,
    output_activation: Sigmoid,
)";

const XOR_TABLE: [([f32; 2], f32); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

/// Inputs 0 and 1, bias 2, output 3, and hidden
/// neurons 4 (OR) and 5 (AND). Weights are scaled
/// for the steepened sigmoid.
fn xor_genome(scale: f32) -> Genome {
    let mut genome = Genome::minimal(2, 1);
    genome.add_neuron(4, NeuronRole::Hidden);
    genome.add_neuron(5, NeuronRole::Hidden);
    for (from, to, weight) in [
        (0, 4, 1.0),
        (1, 4, 1.0),
        (2, 4, -0.5),
        (0, 5, 1.0),
        (1, 5, 1.0),
        (2, 5, -1.5),
        (4, 3, 1.0),
        (5, 3, -2.0),
        (2, 3, -0.5),
    ] {
        genome.add_connection(from, to, weight * scale);
    }
    genome
}

/// Hidden layer of `width` neurons, fully connected,
/// with weights drawn uniformly from ±5.
fn random_genome(width: usize) -> Genome {
    let mut rng = thread_rng();
    let mut genome = Genome::minimal(2, 1);
    for hidden in 4..4 + width {
        genome.add_neuron(hidden, NeuronRole::Hidden);
        for input in 0..=2 {
            genome.add_connection(input, hidden, rng.gen_range(-5.0..=5.0));
        }
        genome.add_connection(hidden, 3, rng.gen_range(-5.0..=5.0));
    }
    genome.add_connection(2, 3, rng.gen_range(-5.0..=5.0));
    genome
}

fn evaluate_xor(network: &mut Network) -> Result<f32, NetworkError> {
    let mut errors = [0.0; 4];
    for (i, (input, output)) in XOR_TABLE.iter().enumerate() {
        errors[i] = (network.predict(input)?[0] - output).abs();
        if errors[i] < ERROR_MARGIN {
            errors[i] = 0.0;
        }
    }
    Ok((4.0 - errors.iter().copied().sum::<f32>()).powf(2.0))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let config: DecoderConfig = ron::from_str(CONFIG)?;
    info!(?config, "loaded decoder configuration");

    let mut network = Network::new(&xor_genome(5.0), &config)?;
    print!("{}", network);
    for (input, expected) in XOR_TABLE.iter() {
        println!("{:?} -> {:.3} (expected {})", input, network.predict(input)?[0], expected);
    }
    println!("Hand-wired fitness: {}", evaluate_xor(&mut network)?);

    // Each worker decodes and owns its network.
    const SAMPLES: usize = 10_000;
    let fitnesses = (0..SAMPLES)
        .into_par_iter()
        .map(|i| {
            let genome = random_genome(1 + i % 4);
            let mut network = Network::new(&genome, &config)?;
            evaluate_xor(&mut network)
        })
        .collect::<Result<Vec<f32>, NetworkError>>()?;

    let solved = fitnesses
        .iter()
        .filter(|&&f| (f - 16.0).abs() < f32::EPSILON)
        .count();
    let mean = fitnesses.iter().sum::<f32>() / SAMPLES as f32;
    let best = fitnesses.iter().copied().fold(f32::MIN, f32::max);
    if solved == 0 {
        warn!("no random network solved XOR");
    }
    println!(
        "Random networks: {} solved, mean fitness {:.3}, best {:.3}, over {} samples",
        solved, mean, best, SAMPLES
    );
    Ok(())
}
