//! Path search in a weighted graph.

pub use self::dijkstra::SearchTree;
pub use self::graph::{GraphSolver, RouteGraph};
pub use self::numtraits::{Infinity, Weight, Zero};

mod dijkstra;
mod frontier;
mod graph;
mod numtraits;

/// Adjacency list graph, for tests only.
#[cfg(test)]
pub(crate) struct TestGraph(pub Vec<Vec<(usize, u32)>>);

#[cfg(test)]
impl TestGraph {
    pub fn undirected(node_count: usize, links: &[(usize, usize, u32)]) -> Self {
        let mut adj = vec![Vec::new(); node_count];
        for &(a, b, w) in links {
            adj[a].push((b, w));
            adj[b].push((a, w));
        }
        TestGraph(adj)
    }
}

#[cfg(test)]
impl RouteGraph for TestGraph {
    type Weight = u32;

    fn node_count(&self) -> usize {
        self.0.len()
    }

    fn for_each_link<F: FnMut(usize, u32)>(&self, node: usize, mut f: F) {
        for &(n, w) in &self.0[node] {
            f(n, w);
        }
    }
}

#[test]
fn test_dijkstra_search() {
    let g = TestGraph::undirected(4, &[(0, 1, 1), (1, 2, 2), (1, 3, 4), (2, 3, 1)]);
    assert_eq!(g.path(0, 3), Some((vec![0, 1, 2, 3], 4)));
    assert_eq!(g.path(3, 0), Some((vec![3, 2, 1, 0], 4)));
    assert_eq!(g.path_search_tree(0).reverse_path(3), Some(vec![3, 2, 1, 0]));
}

#[test]
fn test_dijkstra_search_all() {
    let g = TestGraph::undirected(
        6,
        &[(0, 1, 7), (0, 2, 9), (0, 5, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)],
    );
    let all = g.path_search_tree(0);
    assert_eq!(all.source(), 0);
    let costs = (0..6).map(|n| all.cost_to(n)).collect::<Vec<_>>();
    assert_eq!(costs, vec![Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)]);
    assert_eq!(all.previous(0), None);
    assert_eq!(all.previous(1), Some(0));
    assert_eq!(all.previous(3), Some(2));
    assert_eq!(all.previous(4), Some(5));
    assert_eq!(all.previous(5), Some(2));
}

#[test]
fn test_dijkstra_unreachable() {
    let g = TestGraph::undirected(5, &[(0, 1, 3), (2, 3, 1)]);
    let tree = g.path_search_tree(0);
    assert_eq!(tree.cost_to(1), Some(3));
    assert_eq!(tree.cost_to(2), None);
    assert_eq!(tree.cost_to(4), None);
    assert_eq!(tree.path_to(3), None);
    assert_eq!(tree.path_to(4), None);
    assert_eq!(tree.path_to(0), Some((vec![0], 0)));
}

#[test]
fn test_dijkstra_directed_links() {
    // The solver follows links as given; only the tour makes them symmetric.
    let g = TestGraph(vec![vec![(1, 5)], vec![], vec![(0, 1)]]);
    assert_eq!(g.path(2, 1), Some((vec![2, 0, 1], 6)));
    assert_eq!(g.path(1, 2), None);
}

#[test]
fn test_dijkstra_matches_bellman_ford() {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(0x70_75_72);
    for _ in 0..200 {
        let n = rng.gen_range(1..12_usize);
        let link_count = rng.gen_range(0..n * 2);
        let links = (0..link_count)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(0..20_u32)))
            .collect::<Vec<_>>();
        let g = TestGraph::undirected(n, &links);
        let from = rng.gen_range(0..n);

        // Reference costs by exhaustive relaxation
        let mut expected = vec![None; n];
        expected[from] = Some(0_u32);
        for _ in 0..n {
            for &(a, b, w) in &links {
                for &(x, y) in &[(a, b), (b, a)] {
                    if let Some(cx) = expected[x] {
                        if expected[y].map_or(true, |cy| cx + w < cy) {
                            expected[y] = Some(cx + w);
                        }
                    }
                }
            }
        }

        let tree = g.path_search_tree(from);
        for to in 0..n {
            assert_eq!(tree.cost_to(to), expected[to]);
            match tree.path_to(to) {
                Some((path, cost)) => {
                    assert_eq!(Some(cost), expected[to]);
                    assert_eq!(path.first(), Some(&from));
                    assert_eq!(path.last(), Some(&to));
                    // Path must be made of existing links adding up to the cost
                    let sum = path
                        .windows(2)
                        .map(|hop| g.0[hop[0]].iter().filter(|&&(n, _)| n == hop[1]).map(|&(_, w)| w).min().unwrap())
                        .sum::<u32>();
                    assert_eq!(sum, cost);
                }
                None => assert_eq!(expected[to], None),
            }
        }
    }
}
