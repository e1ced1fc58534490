//! Route service: validates requests, calls into the tour and builds serializable responses.

pub use self::msgs::{
    AddRouteOutput, AddRouteRequest, AddRouteResponse, Response, ShortestRouteOutput, ShortestRouteRequest, ShortestRouteResponse, Status,
};
pub use self::service::Service;

mod msgs;
mod service;
