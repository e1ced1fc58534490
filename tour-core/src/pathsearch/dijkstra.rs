//! Dijkstra path search implementation.

use super::frontier::Frontier;
use super::graph::{GraphSolver, RouteGraph};
use super::numtraits::Weight;

/// Cheapest paths from one source node to every node of a graph.
#[derive(Clone, Debug)]
pub struct SearchTree<W> {
    source: usize,
    /// Predecessor of each node on its cheapest path, `None` for the source and unreached nodes.
    previous: Vec<Option<usize>>,
    /// Cost of the cheapest path to each node, `W::INFINITY` if unreached.
    best_cost: Vec<W>,
}

impl<G: RouteGraph> GraphSolver<G::Weight> for G {
    fn path_search_tree(&self, from: usize) -> SearchTree<G::Weight> {
        search(self, from)
    }
}

/// Run Dijkstra over the whole graph from `source`.
///
/// Every node is queued up front at infinite cost (the source at zero) and
/// popped exactly once. Panics if `source` is not a node of the graph.
fn search<G, W>(graph: &G, source: usize) -> SearchTree<W>
where
    G: RouteGraph<Weight = W>,
    W: Weight,
{
    let node_count = graph.node_count();
    assert!(source < node_count, "source node {} out of range 0..{}", source, node_count);

    let mut previous = vec![None; node_count];
    let mut best_cost = vec![W::INFINITY; node_count];
    best_cost[source] = W::ZERO;

    let mut frontier = Frontier::with_capacity(node_count);
    for (node, &cost) in best_cost.iter().enumerate() {
        frontier.push(node, cost);
    }

    let mut reached = 0;
    while let Some((node, cost)) = frontier.pop() {
        // Everything left in the queue is unreachable
        if cost == W::INFINITY {
            continue;
        }
        reached += 1;

        graph.for_each_link(node, |next, link_cost| {
            let new_cost = match cost.checked_sum(link_cost) {
                Some(new_cost) => new_cost,
                None => return,
            };
            // Only queued nodes are relaxed: a popped node is final.
            if frontier.decrease_cost(next, new_cost) {
                best_cost[next] = new_cost;
                previous[next] = Some(node);
            }
        });
    }

    debug!("path search from {}: reached {} of {} nodes", source, reached, node_count);

    SearchTree {
        source,
        previous,
        best_cost,
    }
}

impl<W: Weight> SearchTree<W> {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Cost of the cheapest path to `node`, `None` if it is unreachable.
    pub fn cost_to(&self, node: usize) -> Option<W> {
        match self.best_cost.get(node) {
            Some(&cost) if cost != W::INFINITY => Some(cost),
            _ => None,
        }
    }

    /// Predecessor of `node` on its cheapest path.
    pub fn previous(&self, node: usize) -> Option<usize> {
        self.previous.get(node).copied().flatten()
    }

    /// Cheapest path from `to` back to the source, `None` if `to` is unreachable.
    pub fn reverse_path(&self, to: usize) -> Option<Vec<usize>> {
        if to != self.source && self.previous(to).is_none() {
            return None;
        }

        let mut rev_path = Vec::new();
        let mut cur = to;
        while cur != self.source {
            rev_path.push(cur);
            cur = self.previous(cur)?;
        }
        rev_path.push(self.source);

        Some(rev_path)
    }

    /// Cheapest path from the source to `to` and its total cost, `None` if `to` is unreachable.
    pub fn path_to(&self, to: usize) -> Option<(Vec<usize>, W)> {
        let mut path = self.reverse_path(to)?;

        // Reverse the path, so the result will be from source to `to`
        path.reverse();

        Some((path, self.best_cost[to]))
    }
}
