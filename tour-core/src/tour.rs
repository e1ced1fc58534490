//! Tour: a graph where nodes are cities and links are routes.

use std::collections::HashMap;

use crate::errors::RouteError;
use crate::pathsearch::{GraphSolver, RouteGraph};
use crate::CityId;

/// Route cost. Costs are expected to be non-negative, but this is not enforced.
pub type Cost = i64;

/// Cities and the routes between them.
///
/// Not synchronized: concurrent users must serialize access to a whole
/// tour behind a single lock.
#[derive(Clone, Default, Debug)]
pub struct Tour {
    /// City ID -> city name
    cities: Vec<String>,
    /// City name -> city ID
    lookup: HashMap<String, CityId>,
    /// City -> city -> cost. Both directions of each route are stored.
    connections: HashMap<CityId, HashMap<CityId, Cost>>,
}

impl Tour {
    /// Create new empty tour.
    pub fn new() -> Self {
        Tour::default()
    }

    /// Add a city, or return the ID it already has.
    pub fn add_city(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = CityId::new(self.cities.len());
        self.cities.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        trace!("new city {} = {}", name, id);
        id
    }

    /// Get city ID by name.
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.lookup.get(name).copied()
    }

    pub fn has_city(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Get city name by ID.
    ///
    /// Panics if `city_id` was not issued by this tour.
    pub fn city_name(&self, city_id: CityId) -> &str {
        match self.cities.get(city_id.index()) {
            Some(name) => name,
            None => panic!("invalid city ID {} (tour has {} cities)", city_id, self.cities.len()),
        }
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// All cities in ID order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &str)> + '_ {
        self.cities.iter().enumerate().map(|(i, name)| (CityId::new(i), name.as_str()))
    }

    /// Number of distinct routes (unordered city pairs).
    pub fn route_count(&self) -> usize {
        self.connections
            .iter()
            .map(|(origin, destinies)| destinies.keys().filter(|&destiny| origin <= destiny).count())
            .sum()
    }

    /// Add a bidirectional route between two cities, replacing any previous cost for that pair.
    pub fn add_route(&mut self, origin_id: CityId, destiny_id: CityId, cost: Cost) {
        self.add_edge(origin_id, destiny_id, cost);
        self.add_edge(destiny_id, origin_id, cost);
        trace!("route {} <-> {} cost {}", origin_id, destiny_id, cost);
    }

    fn add_edge(&mut self, origin_id: CityId, destiny_id: CityId, cost: Cost) {
        self.connections.entry(origin_id).or_default().insert(destiny_id, cost);
    }

    /// Cost of the direct route between two cities, if one exists.
    pub fn cost(&self, origin_id: CityId, destiny_id: CityId) -> Option<Cost> {
        self.connections.get(&origin_id)?.get(&destiny_id).copied()
    }

    /// Cheapest route between two cities (Dijkstra), as the list of visited cities and its total cost.
    ///
    /// Panics if either ID was not issued by this tour.
    pub fn shortest_route(&self, origin_id: CityId, destiny_id: CityId) -> Result<(Vec<CityId>, Cost), RouteError> {
        assert!(destiny_id.index() < self.cities.len(), "invalid city ID {}", destiny_id);

        let tree = self.path_search_tree(origin_id.index());
        let (path, cost) = tree.path_to(destiny_id.index()).ok_or(RouteError::NoPath {
            origin: origin_id,
            destiny: destiny_id,
        })?;

        debug!("shortest route {} -> {}: {} hops, cost {}", origin_id, destiny_id, path.len() - 1, cost);
        Ok((path.into_iter().map(CityId::new).collect(), cost))
    }
}

impl RouteGraph for Tour {
    type Weight = Cost;

    fn node_count(&self) -> usize {
        self.cities.len()
    }

    fn for_each_link<F: FnMut(usize, Cost)>(&self, node: usize, mut f: F) {
        if let Some(destinies) = self.connections.get(&CityId::new(node)) {
            for (destiny, &cost) in destinies {
                f(destiny.index(), cost);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTES: &[(&str, &str, Cost)] = &[
        ("GRU", "BRC", 10),
        ("BRC", "SCL", 5),
        ("GRU", "CDG", 75),
        ("GRU", "SCL", 20),
        ("GRU", "ORL", 56),
        ("ORL", "CDG", 5),
        ("SCL", "ORL", 20),
    ];

    fn sample_tour() -> Tour {
        let mut tour = Tour::new();
        for &(origin, destiny, cost) in ROUTES {
            let origin = tour.add_city(origin);
            let destiny = tour.add_city(destiny);
            tour.add_route(origin, destiny, cost);
        }
        tour
    }

    fn names(tour: &Tour, path: &[CityId]) -> Vec<String> {
        path.iter().map(|&id| tour.city_name(id).to_string()).collect()
    }

    #[test]
    fn test_add_city() {
        let mut tour = Tour::new();
        let a = tour.add_city("A");
        assert_eq!(tour.city_name(a), "A");
        assert_eq!(tour.city_id("A"), Some(a));
        assert!(tour.has_city("A"));

        assert_eq!(tour.add_city("A"), a);
        let b = tour.add_city("B");
        assert_ne!(a, b);
        assert_eq!(b.index(), 1);
        assert_eq!(tour.city_count(), 2);
        assert_eq!(tour.cities().collect::<Vec<_>>(), vec![(a, "A"), (b, "B")]);
    }

    #[test]
    fn test_unknown_city() {
        let mut tour = Tour::new();
        tour.add_city("A");
        assert_eq!(tour.city_id("Z"), None);
        assert!(!tour.has_city("Z"));
        assert_eq!(tour.city_count(), 1);
    }

    #[test]
    #[should_panic(expected = "invalid city ID")]
    fn test_foreign_city_id() {
        let mut other = Tour::new();
        other.add_city("A");
        let b = other.add_city("B");
        let mut tour = Tour::new();
        tour.add_city("A");
        tour.city_name(b);
    }

    #[test]
    fn test_add_route() {
        let mut tour = Tour::new();
        let a = tour.add_city("A");
        let b = tour.add_city("B");
        let c = tour.add_city("C");
        tour.add_route(a, b, 10);
        assert_eq!(tour.cost(a, b), Some(10));
        assert_eq!(tour.cost(b, a), Some(10));
        assert_eq!(tour.cost(a, c), None);
        assert_eq!(tour.cost(c, a), None);
        assert_eq!(tour.route_count(), 1);

        // Last write wins, in both directions
        tour.add_route(b, a, 3);
        assert_eq!(tour.cost(a, b), Some(3));
        assert_eq!(tour.cost(b, a), Some(3));
        assert_eq!(tour.route_count(), 1);
    }

    #[test]
    fn test_shortest_route() {
        let tour = sample_tour();
        let gru = tour.city_id("GRU").unwrap();
        let cdg = tour.city_id("CDG").unwrap();
        let (path, cost) = tour.shortest_route(gru, cdg).unwrap();
        assert_eq!(names(&tour, &path), vec!["GRU", "BRC", "SCL", "ORL", "CDG"]);
        assert_eq!(cost, 40);

        let (path, cost) = tour.shortest_route(cdg, gru).unwrap();
        assert_eq!(names(&tour, &path), vec!["CDG", "ORL", "SCL", "BRC", "GRU"]);
        assert_eq!(cost, 40);
    }

    #[test]
    fn test_shortest_route_same_city() {
        let tour = sample_tour();
        let scl = tour.city_id("SCL").unwrap();
        assert_eq!(tour.shortest_route(scl, scl), Ok((vec![scl], 0)));

        let mut lonely = Tour::new();
        let x = lonely.add_city("X");
        assert_eq!(lonely.shortest_route(x, x), Ok((vec![x], 0)));
    }

    #[test]
    fn test_shortest_route_no_path() {
        let mut tour = sample_tour();
        let gru = tour.city_id("GRU").unwrap();
        let lis = tour.add_city("LIS");
        let opo = tour.add_city("OPO");
        tour.add_route(lis, opo, 1);

        let err = tour.shortest_route(gru, opo).unwrap_err();
        assert_eq!(err, RouteError::NoPath { origin: gru, destiny: opo });
        assert_eq!(err.to_string(), "no path to destiny");
        assert!(tour.shortest_route(lis, gru).is_err());
        assert_eq!(tour.shortest_route(lis, opo).map(|(_, cost)| cost), Ok(1));
    }

    #[test]
    fn test_shortest_route_zero_cost() {
        let mut tour = Tour::new();
        let a = tour.add_city("A");
        let b = tour.add_city("B");
        let c = tour.add_city("C");
        tour.add_route(a, b, 0);
        tour.add_route(b, c, 0);
        tour.add_route(a, c, 1);
        assert_eq!(tour.shortest_route(a, c), Ok((vec![a, b, c], 0)));
    }

    #[test]
    fn test_shortest_route_after_update() {
        let mut tour = sample_tour();
        let gru = tour.city_id("GRU").unwrap();
        let cdg = tour.city_id("CDG").unwrap();
        tour.add_route(gru, cdg, 7);
        assert_eq!(tour.shortest_route(gru, cdg), Ok((vec![gru, cdg], 7)));
    }

    #[test]
    #[should_panic]
    fn test_shortest_route_foreign_id() {
        let mut other = Tour::new();
        other.add_city("A");
        let b = other.add_city("B");
        let mut tour = Tour::new();
        let a = tour.add_city("A");
        let _ = tour.shortest_route(a, b);
    }
}
