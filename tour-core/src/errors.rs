//! Errors.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::CityId;

/// Error loading routes from a text source. Lines applied before the failing one stay applied.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid number of columns on CSV: line {line} has {found}, expected 3")]
    ColumnCount { line: usize, found: usize },

    #[error("bad cost '{value}' on line {line}: {source}")]
    BadCost {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum RouteError {
    #[error("no path to destiny")]
    NoPath { origin: CityId, destiny: CityId },
}
