//! Route service HTTP server.

#[macro_use]
extern crate log;

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Error};
use clap::Parser;
use parking_lot::Mutex;

use tour_api::Service;
use tour_core::Tour;

use crate::config::{Config, ConfigFile};

mod config;
mod webserver;

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();

    let config_file = match &opts.config {
        Some(path) => ConfigFile::load(path).await?,
        None => ConfigFile::default(),
    };
    let config = Config::resolve(config_file, opts.bind, opts.port, opts.route_files);

    let tour = load_tour(&config);
    let service = Arc::new(Mutex::new(Service::new(tour)));

    let routes = webserver::api(service);
    let (addr, server) = warp::serve(routes)
        .try_bind_ephemeral(config.socket_addr())
        .with_context(|| format!("cannot open server on {}", config.socket_addr()))?;
    info!("listening on {}", addr);
    server.await;

    Ok(())
}

/// Load the configured route files. A file that fails to load is reported and skipped,
/// though routes read before the failing line stay loaded.
fn load_tour(config: &Config) -> Tour {
    let mut tour = Tour::new();
    for path in &config.route_files {
        match tour.load_routes_from_file(path) {
            Ok(count) => info!("loaded {} routes from {}", count, path.display()),
            Err(e) => warn!("cannot read CSV file {}: {}", path.display(), e),
        }
    }
    info!("tour has {} cities and {} routes", tour.city_count(), tour.route_count());
    tour
}

/// Shortest route HTTP/JSON service.
#[derive(Parser)]
#[clap(version, author = "The tour developers")]
struct Opts {
    /// Config file path (JSON)
    #[clap(long = "config")]
    config: Option<PathBuf>,

    /// Address to listen on (default `0.0.0.0`)
    #[clap(long = "bind")]
    bind: Option<IpAddr>,

    /// Server port (default 8080)
    #[clap(long = "port")]
    port: Option<u16>,

    /// Route files with `origin,destiny,cost` lines, loaded in order
    #[clap(value_name = "FILE")]
    route_files: Vec<PathBuf>,
}
