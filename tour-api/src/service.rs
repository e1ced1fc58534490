//! Route service.

use log::debug;

use tour_core::Tour;

use crate::msgs::{AddRouteOutput, AddRouteRequest, AddRouteResponse, Response, ShortestRouteOutput, ShortestRouteRequest, ShortestRouteResponse};

/// Route service owning a tour.
///
/// Not synchronized. A concurrent transport must hold one lock around each call.
#[derive(Clone, Default, Debug)]
pub struct Service {
    tour: Tour,
}

impl Service {
    pub fn new(tour: Tour) -> Self {
        Service { tour }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn tour_mut(&mut self) -> &mut Tour {
        &mut self.tour
    }

    /// Add (or replace) a route between two cities, adding the cities if needed.
    pub fn add_route(&mut self, request: &AddRouteRequest) -> AddRouteResponse {
        if request.origin.is_empty() || request.destiny.is_empty() {
            return Response::error("city name cannot be empty");
        }

        let origin_id = self.tour.add_city(&request.origin);
        let destiny_id = self.tour.add_city(&request.destiny);
        self.tour.add_route(origin_id, destiny_id, request.cost);
        debug!("added route {} <-> {} cost {}", request.origin, request.destiny, request.cost);

        Response::ok(AddRouteOutput {})
    }

    /// Find the cheapest route between two known cities.
    pub fn shortest_route(&self, request: &ShortestRouteRequest) -> ShortestRouteResponse {
        let origin_id = match self.tour.city_id(&request.origin) {
            Some(id) => id,
            None => return Response::error(format!("unknown origin city: `{}`", request.origin)),
        };
        let destiny_id = match self.tour.city_id(&request.destiny) {
            Some(id) => id,
            None => return Response::error(format!("unknown destiny city: `{}`", request.destiny)),
        };

        match self.tour.shortest_route(origin_id, destiny_id) {
            Ok((route, cost)) => Response::ok(ShortestRouteOutput {
                shortest_route: route.into_iter().map(|id| self.tour.city_name(id).to_string()).collect(),
                cost,
            }),
            Err(err) => Response::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgs::Status;

    fn add(service: &mut Service, origin: &str, destiny: &str, cost: i64) -> AddRouteResponse {
        let req = AddRouteRequest {
            origin: origin.to_string(),
            destiny: destiny.to_string(),
            cost,
        };
        service.add_route(&req)
    }

    fn shortest(service: &Service, origin: &str, destiny: &str) -> ShortestRouteResponse {
        let req = ShortestRouteRequest {
            origin: origin.to_string(),
            destiny: destiny.to_string(),
        };
        service.shortest_route(&req)
    }

    fn sample_service() -> Service {
        let mut service = Service::default();
        let routes = [
            ("GRU", "BRC", 10),
            ("BRC", "SCL", 5),
            ("GRU", "CDG", 75),
            ("GRU", "SCL", 20),
            ("GRU", "ORL", 56),
            ("ORL", "CDG", 5),
            ("SCL", "ORL", 20),
        ];
        for &(origin, destiny, cost) in routes.iter() {
            assert!(add(&mut service, origin, destiny, cost).is_ok());
        }
        service
    }

    #[test]
    fn test_add_route() {
        let mut service = Service::default();
        let res = add(&mut service, "A", "B", 3);
        assert_eq!(res, Response::ok(AddRouteOutput {}));

        let tour = service.tour();
        let (a, b) = (tour.city_id("A").unwrap(), tour.city_id("B").unwrap());
        assert_eq!(tour.cost(b, a), Some(3));
    }

    #[test]
    fn test_add_route_empty_name() {
        let mut service = Service::default();
        let res = add(&mut service, "", "B", 3);
        assert_eq!(res.status, Status::Error);
        assert_eq!(res.reason.as_deref(), Some("city name cannot be empty"));
        assert_eq!(res.response, None);
        assert!(!add(&mut service, "A", "", 3).is_ok());
        assert_eq!(service.tour().city_count(), 0);
    }

    #[test]
    fn test_shortest_route() {
        let service = sample_service();
        let res = shortest(&service, "GRU", "CDG");
        assert_eq!(res.status, Status::Ok);
        let out = res.response.unwrap();
        assert_eq!(out.shortest_route, vec!["GRU", "BRC", "SCL", "ORL", "CDG"]);
        assert_eq!(out.cost, 40);

        let out = shortest(&service, "ORL", "ORL").response.unwrap();
        assert_eq!(out.shortest_route, vec!["ORL"]);
        assert_eq!(out.cost, 0);
    }

    #[test]
    fn test_shortest_route_errors() {
        let mut service = sample_service();
        assert_eq!(shortest(&service, "XXX", "CDG").reason.as_deref(), Some("unknown origin city: `XXX`"));
        assert_eq!(shortest(&service, "GRU", "YYY").reason.as_deref(), Some("unknown destiny city: `YYY`"));

        add(&mut service, "LIS", "OPO", 1);
        let res = shortest(&service, "GRU", "OPO");
        assert_eq!(res, Response::error("no path to destiny"));
    }
}
