//! Service request and response messages.

use serde::{Deserialize, Serialize};

use tour_core::Cost;

/// Outcome of a service call.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Generic service response: status, failure reason or payload.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Response<T> {
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<T>,
}

impl<T> Response<T> {
    pub fn ok(response: T) -> Self {
        Response {
            status: Status::Ok,
            reason: None,
            response: Some(response),
        }
    }

    pub fn error<S: Into<String>>(reason: S) -> Self {
        Response {
            status: Status::Error,
            reason: Some(reason.into()),
            response: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Missing fields decode as empty names and zero cost.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AddRouteRequest {
    pub origin: String,
    pub destiny: String,
    pub cost: Cost,
}

/// Empty payload of a successful add-route call.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AddRouteOutput {}

pub type AddRouteResponse = Response<AddRouteOutput>;

#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortestRouteRequest {
    pub origin: String,
    pub destiny: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ShortestRouteOutput {
    /// City names from origin to destiny, both included.
    #[serde(rename = "shortestRoute")]
    pub shortest_route: Vec<String>,
    pub cost: Cost,
}

pub type ShortestRouteResponse = Response<ShortestRouteOutput>;
