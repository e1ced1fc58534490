//! Interactive shortest route lookup.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::Parser;
use log::info;

use tour_core::Tour;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();

    let mut tour = Tour::new();
    for path in &opts.route_files {
        let count = tour
            .load_routes_from_file(path)
            .with_context(|| format!("cannot read CSV file {}", path.display()))?;
        info!("loaded {} routes from {}", count, path.display());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_loop(&tour, stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Shortest route lookup between cities loaded from route files.
#[derive(Parser)]
#[clap(version, author = "The tour developers")]
struct Opts {
    /// Route files with `origin,destiny,cost` lines, loaded in order
    #[clap(value_name = "FILE")]
    route_files: Vec<PathBuf>,
}

/// Ask for `ORIGIN-DESTINY` queries until the input ends.
fn prompt_loop<R: BufRead, W: Write>(tour: &Tour, mut input: R, mut output: W) -> io::Result<()> {
    loop {
        write!(output, "please enter the route: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if let Some(query) = line.split_whitespace().next() {
            writeln!(output, "{}", answer(tour, query))?;
        }
    }
    Ok(())
}

fn answer(tour: &Tour, query: &str) -> String {
    let cities = query.split('-').collect::<Vec<_>>();
    if cities.len() != 2 {
        return format!("invalid input: '{}'", query);
    }
    let origin_id = match tour.city_id(cities[0]) {
        Some(id) => id,
        None => return format!("unknown origin city: '{}'", cities[0]),
    };
    let destiny_id = match tour.city_id(cities[1]) {
        Some(id) => id,
        None => return format!("unknown destiny city: '{}'", cities[1]),
    };
    match tour.shortest_route(origin_id, destiny_id) {
        Ok((route, cost)) => {
            let route = route.into_iter().map(|id| tour.city_name(id)).collect::<Vec<_>>();
            format!("best route: {} > ${}", route.join(" - "), cost)
        }
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn sample_tour() -> Tour {
        let mut tour = Tour::new();
        let src = "GRU,BRC,10\nBRC,SCL,5\nGRU,CDG,75\nGRU,SCL,20\nGRU,ORL,56\nORL,CDG,5\nSCL,ORL,20\nLIS,OPO,3";
        tour.load_routes(Cursor::new(src)).expect("bad routes");
        tour
    }

    #[test]
    fn test_answer() {
        let tour = sample_tour();
        assert_eq!(answer(&tour, "GRU-CDG"), "best route: GRU - BRC - SCL - ORL - CDG > $40");
        assert_eq!(answer(&tour, "BRC-BRC"), "best route: BRC > $0");
        assert_eq!(answer(&tour, "GRU-OPO"), "no path to destiny");
        assert_eq!(answer(&tour, "GRU"), "invalid input: 'GRU'");
        assert_eq!(answer(&tour, "GRU-CDG-ORL"), "invalid input: 'GRU-CDG-ORL'");
        assert_eq!(answer(&tour, "XXX-CDG"), "unknown origin city: 'XXX'");
        assert_eq!(answer(&tour, "GRU-"), "unknown destiny city: ''");
    }

    #[test]
    fn test_prompt_loop() {
        let tour = sample_tour();
        let mut output = Vec::new();
        prompt_loop(&tour, Cursor::new("GRU-CDG\n\n  LIS-OPO  extra\nfoo"), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        let prompt = "please enter the route: ";
        let expected = [
            prompt,
            "best route: GRU - BRC - SCL - ORL - CDG > $40\n",
            prompt,
            prompt,
            "best route: LIS - OPO > $3\n",
            prompt,
            "invalid input: 'foo'\n",
            prompt,
        ]
        .concat();
        assert_eq!(output, expected);
    }
}
