use super::edge::Edge;

use bitvec::prelude::*;

/// Assigns every neuron its evaluation depth.
///
/// A depth-first walk is started at each of the `roots` (the
/// network's input neurons), at depth 0, adding one per edge
/// traversed. Each walk keeps its own visited set and never
/// re-descends into a neuron it has already reached, which bounds
/// the walk on cyclic graphs. A neuron's depth is the smallest
/// depth any walk reached it at, or 0 if no walk reached it.
///
/// Sorting by these depths is only guaranteed to place producers
/// before consumers when every neuron is first reached along its
/// longest path from the inputs. On cyclic genomes, or when paths
/// of different lengths converge on a neuron, it may not.
///
/// The walk keeps an explicit stack of `(neuron, depth, next edge)`
/// frames, visiting children in edge order exactly as a recursive
/// pre-order walk would.
pub(crate) fn assign_depths(edges: &[Box<[Edge]>], roots: &[usize]) -> Box<[usize]> {
    let mut observed: Vec<Option<usize>> = vec![None; edges.len()];
    let mut visited = bitvec![0; edges.len()];
    let mut frames: Vec<(usize, usize, usize)> = vec![];

    for &root in roots {
        visited.fill(false);
        visited.set(root, true);
        observe(&mut observed[root], 0);
        frames.push((root, 0, 0));

        while let Some(frame) = frames.last_mut() {
            let (neuron, depth, next_edge) = *frame;
            match edges[neuron].get(next_edge) {
                Some(edge) => {
                    frame.2 += 1;
                    if !visited.replace(edge.target, true) {
                        observe(&mut observed[edge.target], depth + 1);
                        frames.push((edge.target, depth + 1, 0));
                    }
                }
                None => {
                    frames.pop();
                }
            }
        }
    }

    observed.into_iter().map(|d| d.unwrap_or(0)).collect()
}

/// Records `depth` as reached, keeping the minimum.
fn observe(minimum: &mut Option<usize>, depth: usize) {
    *minimum = Some(minimum.map_or(depth, |m| m.min(depth)));
}

/// Counts edges whose source is not ranked strictly
/// before their target.
pub(crate) fn count_order_violations(edges: &[Box<[Edge]>], depths: &[usize]) -> usize {
    edges
        .iter()
        .enumerate()
        .flat_map(|(source, out)| out.iter().map(move |e| (source, e.target)))
        .filter(|&(source, target)| depths[source] >= depths[target])
        .count()
}
