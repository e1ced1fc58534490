//! Server configuration.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;

const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Settings read from the optional JSON config file. Every field may be omitted.
#[derive(Clone, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    /// Address to listen on.
    pub bind: Option<IpAddr>,

    /// Port to listen on.
    pub port: Option<u16>,

    /// Route files loaded at startup, before the ones given on the command line.
    #[serde(default)]
    pub route_files: Vec<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigFile {
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("reading config file {}", path.display());
        let data = fs::read(path).await.map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &data)
    }

    fn parse(path: &Path, data: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective server configuration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    pub route_files: Vec<PathBuf>,
}

impl Config {
    /// Combine config file settings with command line values, the latter taking precedence.
    pub fn resolve(file: ConfigFile, bind: Option<IpAddr>, port: Option<u16>, route_files: Vec<PathBuf>) -> Self {
        let mut all_files = file.route_files;
        all_files.extend(route_files);
        Config {
            bind: bind.or(file.bind).unwrap_or(DEFAULT_BIND),
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            route_files: all_files,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
