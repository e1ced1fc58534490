//! Bulk route loading from `origin,destiny,cost` lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::LoadError;
use crate::tour::{Cost, Tour};

const COLUMN_COUNT: usize = 3;

impl Tour {
    /// Load routes, one `origin,destiny,cost` record per line. Fields are trimmed, blank lines skipped.
    ///
    /// Returns the number of routes added. Stops at the first bad line;
    /// routes from the lines before it are kept.
    pub fn load_routes<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        let mut count = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (origin, destiny, cost) = parse_record(i + 1, &line)?;
            let origin_id = self.add_city(origin);
            let destiny_id = self.add_city(destiny);
            self.add_route(origin_id, destiny_id, cost);
            count += 1;
        }
        debug!("loaded {} routes, tour has {} cities", count, self.city_count());
        Ok(count)
    }

    /// Load routes from a file, see [`load_routes`](Tour::load_routes).
    pub fn load_routes_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LoadError> {
        let file = File::open(path)?;
        self.load_routes(BufReader::new(file))
    }
}

fn parse_record(line_no: usize, line: &str) -> Result<(&str, &str, Cost), LoadError> {
    let columns = line.split(',').map(str::trim).collect::<Vec<_>>();
    if columns.len() != COLUMN_COUNT {
        return Err(LoadError::ColumnCount {
            line: line_no,
            found: columns.len(),
        });
    }
    let cost = columns[2].parse::<Cost>().map_err(|e| LoadError::BadCost {
        line: line_no,
        value: columns[2].to_string(),
        source: e,
    })?;
    Ok((columns[0], columns[1], cost))
}
