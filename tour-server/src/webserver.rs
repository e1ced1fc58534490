//! Web server

use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::path::FullPath;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use tour_api::{AddRouteRequest, AddRouteResponse, Service, ShortestRouteRequest, ShortestRouteResponse};

/// The route service shared by all connections. One lock is held per request.
pub type SharedService = Arc<Mutex<Service>>;

const JSON_CONTENT_TYPE: &str = "application/json";

pub(super) fn api(service: SharedService) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    // endpoint '/route/add'
    let add = warp::path!("route" / "add").and(service_route(service.clone(), add_route));
    // endpoint '/route/shortest'
    let shortest = warp::path!("route" / "shortest").and(service_route(service, shortest_route));

    add.or(shortest)
}

fn add_route(service: &mut Service, request: &AddRouteRequest) -> AddRouteResponse {
    service.add_route(request)
}

fn shortest_route(service: &mut Service, request: &ShortestRouteRequest) -> ShortestRouteResponse {
    service.shortest_route(request)
}

/// JSON request -> service call -> JSON response, for one service method.
fn service_route<Req, Resp>(
    service: SharedService,
    call: fn(&mut Service, &Req) -> Resp,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone
where
    Req: DeserializeOwned + 'static,
    Resp: Serialize + 'static,
{
    warp::method()
        .and(warp::path::full())
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .map(move |method: Method, path: FullPath, content_type: Option<String>, body: Bytes| {
            handle_request(&service, call, method, path, content_type, body)
        })
}

fn handle_request<Req, Resp>(
    service: &SharedService,
    call: fn(&mut Service, &Req) -> Resp,
    method: Method,
    path: FullPath,
    content_type: Option<String>,
    body: Bytes,
) -> Response
where
    Req: DeserializeOwned,
    Resp: Serialize,
{
    info!("{} {}", method, path.as_str());

    if method != Method::POST {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    if content_type.as_deref() != Some(JSON_CONTENT_TYPE) {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }

    let request: Req = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!("cannot decode request body: {}", err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let response = {
        let mut service = service.lock();
        call(&mut *service, &request)
    };

    warp::reply::json(&response).into_response()
}
