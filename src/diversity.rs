//! Structural diversity between individuals.

use crate::individual::Individual;
use crate::problem::Problem;

/// Broken-pairs distance between two individuals of the same instance.
///
/// For every client the predecessor and successor are compared separately,
/// so each client contributes at most two breaks. The count is normalised by
/// `2 * num_clients`, giving 0 for identical adjacency structure (whatever
/// the route order) and 1 when no adjacency is shared.
pub fn broken_pairs_distance(problem: &Problem, first: &Individual, second: &Individual) -> f64 {
    let num_clients = problem.num_clients();
    if num_clients == 0 {
        return 0.0;
    }

    let neighbours_a = first.neighbours();
    let neighbours_b = second.neighbours();

    let breaks: usize = (1..=num_clients)
        .map(|client| match (neighbours_a[client], neighbours_b[client]) {
            (Some((pred_a, succ_a)), Some((pred_b, succ_b))) => {
                usize::from(pred_a != pred_b) + usize::from(succ_a != succ_b)
            }
            (None, None) => 0,
            // Only reachable when the individuals come from different instances
            _ => 2,
        })
        .sum();

    breaks as f64 / (2 * num_clients) as f64
}
