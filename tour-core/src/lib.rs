//! City route graph: city interning, bidirectional routes and shortest route search.

#[macro_use]
extern crate log;

pub use self::city::CityId;
pub use self::errors::{LoadError, RouteError};
pub use self::tour::{Cost, Tour};

mod city;
mod errors;
mod loader;
mod tour;

pub mod pathsearch;
