//! Path solver graph traits.

use super::dijkstra::SearchTree;
use super::numtraits::Weight;

/// Read-only view of a weighted graph with dense node indices `0..node_count()`.
pub trait RouteGraph {
    type Weight: Weight;

    /// Number of nodes. Valid node indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Call `f` with every `(neighbor, weight)` link going out of `node`.
    fn for_each_link<F: FnMut(usize, Self::Weight)>(&self, node: usize, f: F);
}

/// Path finding functions.
pub trait GraphSolver<W> {
    /// Cheapest paths from `from` to every node of the graph.
    fn path_search_tree(&self, from: usize) -> SearchTree<W>;

    /// Cheapest path from `from` node to `to` node, with its total weight.
    fn path(&self, from: usize, to: usize) -> Option<(Vec<usize>, W)>
    where
        W: Weight,
    {
        self.path_search_tree(from).path_to(to)
    }
}
